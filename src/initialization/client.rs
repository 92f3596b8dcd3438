//! HTTP client initialization.

use std::time::Duration;

use reqwest::Client;

use crate::config::{Config, DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Builds the HTTP client used for enrichment lookups.
///
/// The per-request timeout comes from the configuration; a hung request
/// beyond that stalls only its own chunk slot until the timeout fires.
pub fn init_client(config: &Config) -> Result<Client, InitializationError> {
    let client = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_succeeds_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }
}
