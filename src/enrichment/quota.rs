//! Quota signal extraction.
//!
//! The service reports remaining quota inconsistently depending on the
//! account type: prepaid accounts get a credits header, some free and
//! subscription accounts get a rate-limit header, and many keys get nothing
//! at all. The sources are tried in a fixed order and the first parseable
//! value wins; no header at all is the explicit [`QuotaSignal::Unknown`],
//! which consumers must keep distinct from a resolved zero.

use std::fmt;

use reqwest::header::HeaderMap;

/// Remaining-usage signal reported by the service, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaSignal {
    /// The service reported this many remaining lookups/credits.
    Remaining(u64),
    /// The service did not expose a quota. Not zero, and not an error.
    Unknown,
}

impl QuotaSignal {
    /// True when the service reported a concrete value.
    pub fn is_known(&self) -> bool {
        matches!(self, QuotaSignal::Remaining(_))
    }
}

impl fmt::Display for QuotaSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotaSignal::Remaining(n) => write!(f, "{}", n),
            QuotaSignal::Unknown => f.write_str("unknown/unlimited"),
        }
    }
}

/// Quota header names, in precedence order: credits (prepaid accounts)
/// before rate-limit (free/subscription accounts).
const QUOTA_HEADERS: [&str; 2] = ["X-Credits-Remaining", "X-RateLimit-Remaining"];

/// Extracts the quota signal from response headers.
///
/// A header that is present but empty or non-numeric is treated the same as
/// an absent one and the next source is consulted. That leniency is
/// deliberate; the upstream deployment behaves the same way.
pub fn extract_quota(headers: &HeaderMap) -> QuotaSignal {
    QUOTA_HEADERS
        .iter()
        .find_map(|name| numeric_header(headers, name))
        .map(QuotaSignal::Remaining)
        .unwrap_or(QuotaSignal::Unknown)
}

fn numeric_header(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
