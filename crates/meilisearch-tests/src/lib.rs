//! Integration tests for the MeiliSearch client.
//!
//! These tests require a running MeiliSearch instance and are ignored by
//! default; run them with `cargo test -p meilisearch-tests -- --ignored`.
//! Configure the instance via `MEILI_URL` (default: `http://localhost:7700`)
//! and `MEILI_API_KEY` (optional). Set `RUST_LOG=meilisearch_client=debug` to
//! see every request.

use meilisearch_client::{Client, Config, DEFAULT_URL, Index, UpdateState};
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::EnvFilter;


/// Gets the MeiliSearch URL from environment or uses default.
#[must_use]
pub fn get_meili_url() -> String {
    std::env::var("MEILI_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
}

/// Installs a log subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a test client configured for the instance.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<Client, meilisearch_client::Error> {
    init_tracing();

    let mut config = Config::new(get_meili_url())?;
    if let Ok(api_key) = std::env::var("MEILI_API_KEY") {
        config = config.with_api_key(api_key);
    }
    Client::new(config)
}

/// Generates a unique index uid to avoid conflicts between tests.
#[must_use]
pub fn unique_uid(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}

/// Maximum number of status requests made by [`wait_for_update`].
pub const MAX_UPDATE_POLLS: u32 = 200;

/// Delay between two status requests made by [`wait_for_update`].
pub const UPDATE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Polls an update until the service leaves the enqueued state.
///
/// Gives up after [`MAX_UPDATE_POLLS`] requests and returns the last state
/// seen, which is then still [`UpdateState::Enqueued`].
///
/// # Errors
/// Returns error if a status request fails.
pub async fn wait_for_update(
    index: &Index,
    update_id: u64,
) -> Result<UpdateState, meilisearch_client::Error> {
    wait_for_update_with(index, update_id, MAX_UPDATE_POLLS, UPDATE_POLL_INTERVAL).await
}

/// Same as [`wait_for_update`] with an explicit poll budget.
///
/// # Errors
/// Returns error if a status request fails.
pub async fn wait_for_update_with(
    index: &Index,
    update_id: u64,
    max_polls: u32,
    interval: Duration,
) -> Result<UpdateState, meilisearch_client::Error> {
    let mut state = UpdateState::Enqueued;
    for poll in 0..max_polls {
        if poll > 0 {
            tokio::time::sleep(interval).await;
        }
        state = index.get_update_status(update_id).await?.status;
        if state != UpdateState::Enqueued {
            break;
        }
    }
    Ok(state)
}
