//! HTTP request layer shared by every resource wrapper.

use crate::config::{API_KEY_HEADER, Config};
use crate::error::Error;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Issues requests against the configured MeiliSearch instance.
#[derive(Debug, Clone)]
pub(crate) struct HttpRequests {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl HttpRequests {
    /// Creates the transport for a configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub(crate) fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, body).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, body).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send::<(), T>(Method::DELETE, path, None).await
    }

    /// GET that only checks the status; the body is never decoded.
    pub(crate) async fn get_empty(&self, path: &str) -> Result<(), Error> {
        self.send_empty::<()>(Method::GET, path, None).await
    }

    /// PUT that only checks the status; the body is never decoded.
    pub(crate) async fn put_empty<B>(&self, path: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_empty(Method::PUT, path, body).await
    }

    /// DELETE that only checks the status; the body is never decoded.
    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), Error> {
        self.send_empty::<()>(Method::DELETE, path, None).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        let resp = self.dispatch(&method, &url, body).await?;
        handle_response(&method, &url, resp).await
    }

    async fn send_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url_for(path);
        let resp = self.dispatch(&method, &url, body).await?;
        handle_empty_response(&method, &url, resp).await
    }

    async fn dispatch<B>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, Error>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method.clone(), url);
        if let Some(api_key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

/// Appends an encoded query string to a path; an empty query leaves the path untouched.
pub(crate) fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, Error> {
    let params = serde_urlencoded::to_string(query)?;
    if params.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, params))
    }
}

async fn handle_response<T: DeserializeOwned>(
    method: &Method,
    url: &str,
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    if status.is_success() {
        let bytes = resp.bytes().await?;
        // 204 and friends: decode as JSON null so `()` and `Option<_>` callers succeed.
        if bytes.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        Err(error_response(method, url, resp).await)
    }
}

async fn handle_empty_response(
    method: &Method,
    url: &str,
    resp: reqwest::Response,
) -> Result<(), Error> {
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(error_response(method, url, resp).await)
    }
}

async fn error_response(method: &Method, url: &str, resp: reqwest::Response) -> Error {
    let status = resp.status().as_u16();
    let body = match resp.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!(%method, %url, status, error = %err, "failed to read error body");
            String::new()
        }
    };
    warn!(%method, %url, status, "request failed");
    Error::Http { status, body }
}
