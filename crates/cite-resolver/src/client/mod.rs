//! Shared HTTP client for the DBLP and arXiv adapters.
//!
//! One pooled reqwest client with:
//! - A fixed per-request timeout (10s by default) on every outbound call
//! - Status classification into [`ClientError`]
//! - No retries and no caching; each call is attempted exactly once

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// HTTP client used by every source adapter.
#[derive(Clone)]
pub struct HttpClient {
    /// Pooled reqwest client.
    client: Client,

    /// Request timeout, reported back in [`ClientError::Timeout`].
    request_timeout: Duration,
}

impl HttpClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, request_timeout: config.request_timeout })
    }

    /// Timeout applied to each request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// GET a URL and return the body as text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or a non-success status.
    pub async fn get_text(&self, url: &str, params: &[(&str, &str)]) -> ClientResult<String> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        tracing::debug!(
            url = %response.url(),
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received response"
        );

        let response = self.handle_response(response).await?;
        response.text().await.map_err(|e| self.classify(e))
    }

    /// GET a URL and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, non-success status, or bad JSON.
    pub async fn get_json<T>(&self, url: &str, params: &[(&str, &str)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(url, params).await?;
        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Map transport errors, singling out timeouts.
    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            404 => {
                let url = response.url().to_string();
                Err(ClientError::not_found(url))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").field("request_timeout", &self.request_timeout).finish()
    }
}
