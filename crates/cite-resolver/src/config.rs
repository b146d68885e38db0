//! Configuration for the citation resolver.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// DBLP publication search endpoint.
    pub const DBLP_SEARCH_API: &str = "https://dblp.org/search/publ/api";

    /// arXiv article metadata endpoint (Atom feed).
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// Request timeout applied to every outbound call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// User agent sent to both sources.
    pub const USER_AGENT: &str = concat!("cite-resolver/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable names read by [`Config::from_env`].
pub mod env {
    /// Override for the DBLP search endpoint.
    pub const DBLP_SEARCH_URL: &str = "CITE_DBLP_SEARCH_URL";

    /// Override for the arXiv API endpoint.
    pub const ARXIV_API_URL: &str = "CITE_ARXIV_API_URL";

    /// Request timeout in whole seconds.
    pub const TIMEOUT_SECS: &str = "CITE_TIMEOUT_SECS";
}

/// Resolver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// DBLP publication search URL (for testing with mock servers).
    pub dblp_search_url: String,

    /// arXiv API URL (for testing with mock servers).
    pub arxiv_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User agent header.
    pub user_agent: String,
}

impl Config {
    /// Create the default configuration pointing at the public APIs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dblp_search_url: api::DBLP_SEARCH_API.to_string(),
            arxiv_api_url: api::ARXIV_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            user_agent: api::USER_AGENT.to_string(),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            dblp_search_url: format!("{}/search/publ/api", base_url),
            arxiv_api_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            user_agent: api::USER_AGENT.to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if `CITE_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var(env::DBLP_SEARCH_URL) {
            config.dblp_search_url = url;
        }
        if let Ok(url) = std::env::var(env::ARXIV_API_URL) {
            config.arxiv_api_url = url;
        }
        if let Ok(secs) = std::env::var(env::TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().with_context(|| {
                format!("{} must be a whole number of seconds", env::TIMEOUT_SECS)
            })?;
            config = config.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(config)
    }

    /// Replace the request timeout.
    ///
    /// # Errors
    ///
    /// Returns error for a zero timeout, which would fail every call.
    pub fn with_timeout(mut self, timeout: Duration) -> anyhow::Result<Self> {
        anyhow::ensure!(!timeout.is_zero(), "request timeout must be greater than zero");
        self.request_timeout = timeout;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dblp_search_url, api::DBLP_SEARCH_API);
        assert_eq!(config.arxiv_api_url, api::ARXIV_API);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.dblp_search_url, "http://127.0.0.1:9999/search/publ/api");
        assert_eq!(config.arxiv_api_url, "http://127.0.0.1:9999/api/query");
    }

    #[test]
    fn test_with_timeout_rejects_zero() {
        assert!(Config::new().with_timeout(Duration::ZERO).is_err());

        let config = Config::new().with_timeout(Duration::from_secs(3)).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }
}
