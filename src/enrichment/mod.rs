//! Enrichment service client.
//!
//! One outbound lookup per identifier against the IP2Location.io HTTP API.
//! Lookup problems of any kind (transport failures, non-2xx statuses,
//! malformed bodies, service-reported errors) are folded into
//! [`LookupResult::Failure`] so a batch run can keep going; nothing escapes
//! this boundary except the pre-flight credential check.

mod quota;
mod response;

pub use quota::{extract_quota, QuotaSignal};
pub use response::{LookupResponse, ServiceError};

use log::debug;

use crate::config::API_KEY_ENV;
use crate::error_handling::ConfigError;

/// Successfully enriched identifier.
///
/// Geographic and usage fields are raw service values; translation to
/// display labels happens at aggregation time.
#[derive(Debug, Clone)]
pub struct EnrichedIp {
    /// The queried address.
    pub ip: String,
    /// ISO country code.
    pub country_code: Option<String>,
    /// Raw country name.
    pub country: Option<String>,
    /// Raw region name.
    pub region: Option<String>,
    /// Raw city name.
    pub city: Option<String>,
    /// Usage-type code.
    pub usage_type: Option<String>,
    /// Whether the address is a known proxy/VPN exit.
    pub is_proxy: bool,
    /// Autonomous system number.
    pub asn: Option<String>,
    /// Autonomous system organization.
    pub as_org: Option<String>,
    /// Quota signal observed on this response.
    pub quota: QuotaSignal,
}

/// Outcome of one lookup. Every submitted identifier produces exactly one.
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// The service returned enrichment data.
    Success(EnrichedIp),
    /// The lookup failed; `message` is human-readable.
    Failure {
        /// The queried address.
        ip: String,
        /// What went wrong.
        message: String,
    },
}

impl LookupResult {
    /// The queried address, regardless of outcome.
    pub fn ip(&self) -> &str {
        match self {
            LookupResult::Success(e) => &e.ip,
            LookupResult::Failure { ip, .. } => ip,
        }
    }

    /// True for successful lookups.
    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success(_))
    }
}

/// Picks the API key for a run.
///
/// A caller-supplied key (trimmed, non-empty) takes precedence over the
/// configured default key; with neither available the run must not start,
/// so this is a configuration error rather than a retriable condition.
pub fn resolve_credential(
    caller_key: Option<&str>,
    default_key: Option<&str>,
) -> Result<String, ConfigError> {
    let trimmed = caller_key.map(str::trim).filter(|k| !k.is_empty());
    let fallback = default_key.map(str::trim).filter(|k| !k.is_empty());
    trimmed
        .or(fallback)
        .map(str::to_string)
        .ok_or(ConfigError::MissingCredential(API_KEY_ENV))
}

/// HTTP client for the lookup service.
#[derive(Debug, Clone)]
pub struct EnrichmentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EnrichmentClient {
    /// Creates a client over an already-configured `reqwest::Client`.
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Looks up one identifier. Never fails; errors become failure results.
    pub async fn lookup(&self, ip: &str, api_key: &str) -> LookupResult {
        match self.send_lookup(ip, api_key).await {
            Ok(enriched) => LookupResult::Success(enriched),
            Err(message) => {
                debug!("lookup for {} failed: {}", ip, message);
                LookupResult::Failure {
                    ip: ip.to_string(),
                    message,
                }
            }
        }
    }

    async fn send_lookup(&self, ip: &str, api_key: &str) -> Result<EnrichedIp, String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("key", api_key), ("ip", ip), ("format", "json")])
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        // Quota headers ride on both success and error responses; read them
        // before the body consumes the response.
        let quota = extract_quota(response.headers());
        let status = response.status();

        if !status.is_success() {
            // Prefer the service's own message when the error body parses.
            let message = match response.json::<LookupResponse>().await {
                Ok(body) => body
                    .error
                    .map(|e| e.error_message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("service returned HTTP {}", status)),
                Err(_) => format!("service returned HTTP {}", status),
            };
            return Err(message);
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed response body: {}", e))?;

        if let Some(err) = body.error {
            let message = if err.error_message.is_empty() {
                "service reported an unspecified error".to_string()
            } else {
                err.error_message
            };
            return Err(message);
        }

        Ok(EnrichedIp {
            ip: ip.to_string(),
            country_code: body.country_code,
            country: body.country_name,
            region: body.region_name,
            city: body.city_name,
            usage_type: body.usage_type,
            is_proxy: body.is_proxy,
            asn: body.asn,
            as_org: body.as_org,
            quota,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_key_takes_precedence() {
        let key = resolve_credential(Some("caller"), Some("default")).expect("key");
        assert_eq!(key, "caller");
    }

    #[test]
    fn test_blank_caller_key_falls_back_to_default() {
        let key = resolve_credential(Some("   "), Some("default")).expect("key");
        assert_eq!(key, "default");
        let key = resolve_credential(None, Some("default")).expect("key");
        assert_eq!(key, "default");
    }

    #[test]
    fn test_missing_both_keys_is_a_configuration_error() {
        let err = resolve_credential(None, None).expect_err("must be rejected");
        assert!(matches!(err, ConfigError::MissingCredential(_)));
        let err = resolve_credential(Some(""), Some("  ")).expect_err("must be rejected");
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }

    #[test]
    fn test_lookup_result_accessors() {
        let success = LookupResult::Success(EnrichedIp {
            ip: "8.8.8.8".into(),
            country_code: None,
            country: None,
            region: None,
            city: None,
            usage_type: None,
            is_proxy: false,
            asn: None,
            as_org: None,
            quota: QuotaSignal::Unknown,
        });
        assert!(success.is_success());
        assert_eq!(success.ip(), "8.8.8.8");

        let failure = LookupResult::Failure {
            ip: "10.0.0.1".into(),
            message: "boom".into(),
        };
        assert!(!failure.is_success());
        assert_eq!(failure.ip(), "10.0.0.1");
    }
}
