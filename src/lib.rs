//! HTTP client library for the MeiliSearch API.
//!
//! Every method maps to one HTTP request against the configured instance and
//! returns the decoded JSON response. Non-2xx responses surface as
//! [`Error::Http`] carrying the status and body; nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use meilisearch_client::{Client, Config, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), meilisearch_client::Error> {
//!     let config = Config::new("http://localhost:7700")?.with_api_key("masterKey");
//!     let client = Client::new(config)?;
//!
//!     client.health().await?;
//!
//!     let movies = client.create_index("movies", Some("id"), None).await?;
//!     let results = movies
//!         .search::<serde_json::Value>(&SearchQuery::new("carol"))
//!         .await?;
//!     println!("{} hits", results.nb_hits);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod index;
mod request;
mod stat;
mod types;

pub use client::Client;
pub use config::{API_KEY_HEADER, Config, DEFAULT_URL};
pub use error::Error;
pub use index::Index;
pub use types::*;
