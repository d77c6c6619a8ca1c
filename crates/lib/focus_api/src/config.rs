//! API server configuration.

use std::time::Duration;

/// Default artificial processing delay applied to each chat request.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Pause before answering a chat message.
    pub response_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            response_delay: DEFAULT_RESPONSE_DELAY,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable            | Default          |
    /// |---------------------|------------------|
    /// | `BIND_ADDR`         | `127.0.0.1:5000` |
    /// | `RESPONSE_DELAY_MS` | `1000`           |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            response_delay: std::env::var("RESPONSE_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.response_delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_port_5000_with_one_second_delay() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.response_delay, Duration::from_secs(1));
    }
}
