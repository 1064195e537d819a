//! Client configuration.

/// The Wikidata action API endpoint.
pub const WIKIDATA_API_URL: &str = "https://www.wikidata.org/w/api.php";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("wbtk/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the API endpoint.
pub const API_URL_VAR: &str = "WBTK_API_URL";

/// Environment variable overriding the User-Agent.
pub const USER_AGENT_VAR: &str = "WBTK_USER_AGENT";

/// Configuration for a Wikibase API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The action API endpoint.
    pub api_url: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// The `maxlag` parameter sent with writes: the server rejects edits
    /// while replication lag exceeds this many seconds.
    pub maxlag: u64,
    /// How many times a maxlag rejection is retried before giving up.
    pub maxlag_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: WIKIDATA_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            maxlag: 5,
            maxlag_retries: 3,
        }
    }
}

impl ClientConfig {
    /// The default configuration with [`API_URL_VAR`] and
    /// [`USER_AGENT_VAR`] overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_url) = std::env::var(API_URL_VAR) {
            config.api_url = api_url;
        }
        if let Ok(user_agent) = std::env::var(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        config
    }

    /// The same configuration pointed at another Wikibase instance.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_wikidata() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, WIKIDATA_API_URL);
        assert!(config.user_agent.starts_with("wbtk/"));
        assert_eq!(config.maxlag, 5);
    }

    #[test]
    fn with_api_url_retargets_the_client() {
        let config = ClientConfig::default().with_api_url("https://wiki.example/w/api.php");
        assert_eq!(config.api_url, "https://wiki.example/w/api.php");
    }
}
