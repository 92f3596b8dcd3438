//! Service response schema.
//!
//! The lookup service returns a loosely-shaped JSON document; every field is
//! optional here and missing data degrades to documented defaults further
//! down the pipeline (a missing usage-type code displays as itself, missing
//! geographic names display as "-"). Error responses carry an `error` object
//! instead of data fields, sometimes alongside a 2xx status.

use serde::{Deserialize, Deserializer};

/// Raw lookup response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupResponse {
    /// Echo of the queried address.
    #[serde(default)]
    pub ip: Option<String>,

    /// ISO country code (used for flag display in downstream UIs).
    #[serde(default)]
    pub country_code: Option<String>,

    /// Raw country name.
    #[serde(default)]
    pub country_name: Option<String>,

    /// Raw region/province name.
    #[serde(default)]
    pub region_name: Option<String>,

    /// Raw city name.
    #[serde(default)]
    pub city_name: Option<String>,

    /// Usage-type code (e.g. `DCH`, `ISP`).
    #[serde(default)]
    pub usage_type: Option<String>,

    /// Whether the address is a known proxy/VPN exit.
    #[serde(default)]
    pub is_proxy: bool,

    /// Autonomous system number. The service sends this as a string, but
    /// numbers have been observed too; both are accepted.
    #[serde(default, deserialize_with = "string_or_number")]
    pub asn: Option<String>,

    /// Autonomous system organization.
    #[serde(default, rename = "as")]
    pub as_org: Option<String>,

    /// Error payload, present when the lookup was rejected.
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// Error object embedded in a response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    /// Numeric error code, when provided.
    #[serde(default)]
    pub error_code: Option<i64>,

    /// Human-readable message.
    #[serde(default)]
    pub error_message: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}
