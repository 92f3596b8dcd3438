//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including batch sizing, pacing, timeouts, and external service defaults.

use std::time::Duration;

/// Number of lookups dispatched concurrently per chunk.
///
/// The upstream service is rate limited, so identifiers are processed in
/// fixed-size chunks rather than with unbounded concurrency. Every lookup in
/// a chunk must settle before the next chunk is dispatched.
pub const LOOKUP_CHUNK_SIZE: usize = 5;

/// Pause inserted between consecutive chunks.
///
/// Gives the upstream rate limiter room to breathe between bursts of
/// [`LOOKUP_CHUNK_SIZE`] concurrent requests.
pub const CHUNK_PACING: Duration = Duration::from_millis(200);

/// Default IP2Location.io lookup endpoint.
///
/// Overridable via `--endpoint`, which is mainly useful for pointing the
/// client at a mock server in tests.
pub const DEFAULT_ENDPOINT: &str = "https://api.ip2location.io/";

/// Environment variable holding the default API key.
///
/// A key passed explicitly (CLI flag) always takes precedence over this.
pub const API_KEY_ENV: &str = "IP2LOCATION_API_KEY";

/// Environment variable holding the administrative secret that guards
/// mapping store writes.
pub const ADMIN_TOKEN_ENV: &str = "ADMIN_TOKEN";

/// Default path of the mapping store document.
pub const DEFAULT_MAPPING_PATH: &str = "./mapping.json";

/// Key under which the mapping table is stored in the mapping store.
pub const MAPPING_STORE_KEY: &str = "mapping_data";

/// Base name for exported report files; the current date and the format's
/// extension are appended.
pub const EXPORT_BASENAME: &str = "IP_Report";

/// Per-request timeout in seconds (default).
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// User-Agent header value for outbound lookups.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_enrich/", env!("CARGO_PKG_VERSION"));
