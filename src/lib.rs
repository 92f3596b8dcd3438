//! ip_enrich library: batch IP enrichment functionality
//!
//! This library extracts IPv4/IPv6 addresses from free-form text, enriches
//! them with geolocation and usage metadata from the IP2Location.io lookup
//! service, and groups, summarizes, and exports the results.
//!
//! # Example
//!
//! ```no_run
//! use ip_enrich::{run_enrichment, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("addresses.txt"),
//!     api_key: Some("demo-key".into()),
//!     ..Default::default()
//! };
//!
//! let report = run_enrichment(config).await?;
//! println!(
//!     "Enriched {} addresses: {} direct, {} proxied, {} failed",
//!     report.stats.total, report.stats.direct, report.stats.proxy, report.stats.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod aggregate;
mod batch;
pub mod config;
mod enrichment;
mod error_handling;
pub mod export;
mod extract;
pub mod initialization;
pub mod mapping;

// Re-export public API
pub use aggregate::{
    build_rows, group_results, summarize, ExportRow, Group, SummaryStats, FAILED_BUCKET,
};
pub use batch::{BatchRun, BatchSession};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use enrichment::{
    extract_quota, resolve_credential, EnrichedIp, EnrichmentClient, LookupResult, QuotaSignal,
};
pub use error_handling::{AdminError, ConfigError, InitializationError, StoreError};
pub use extract::extract_ips;
pub use run::{run_enrichment, EnrichmentReport};

// Internal run module (contains the main enrichment pipeline)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use log::info;
    use tokio::io::AsyncReadExt;

    use crate::aggregate::{build_rows, group_results, summarize, ExportRow, Group, SummaryStats};
    use crate::batch::BatchSession;
    use crate::config::{Config, ADMIN_TOKEN_ENV, API_KEY_ENV};
    use crate::enrichment::{resolve_credential, EnrichmentClient, LookupResult, QuotaSignal};
    use crate::export::export_rows;
    use crate::extract::extract_ips;
    use crate::initialization::init_client;
    use crate::mapping::{FileStore, MappingResolver};

    /// Results of one enrichment run.
    #[derive(Debug)]
    pub struct EnrichmentReport {
        /// Summary counts (`total == direct + proxy + failed`).
        pub stats: SummaryStats,
        /// Last known quota signal observed across the run, or the explicit
        /// unknown state when no response exposed one.
        pub quota: QuotaSignal,
        /// Results grouped by resolved locale label.
        pub groups: Vec<Group>,
        /// Flattened rows, one per result.
        pub rows: Vec<ExportRow>,
        /// Paths of report files written by this run.
        pub exports: Vec<PathBuf>,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs one enrichment batch with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads free-form text
    /// from the input (a file, or stdin when the path is `-`), extracts the
    /// addresses, enriches them in paced chunks, and aggregates the results.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available (before any lookup is
    /// attempted), if the input cannot be read, if it contains no addresses,
    /// or if a requested export cannot be written. Individual lookup
    /// failures never abort the run; they surface as failure results in the
    /// report.
    pub async fn run_enrichment(config: Config) -> Result<EnrichmentReport> {
        let start = Instant::now();

        // Pre-flight: without a credential nothing is dispatched.
        let default_key = std::env::var(API_KEY_ENV).ok();
        let api_key = resolve_credential(config.api_key.as_deref(), default_key.as_deref())?;

        let text = if config.input.as_os_str() == "-" {
            info!("Reading input from stdin");
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        } else {
            tokio::fs::read_to_string(&config.input)
                .await
                .with_context(|| {
                    format!("Failed to read input file {}", config.input.display())
                })?
        };

        let identifiers = extract_ips(&text);
        if identifiers.is_empty() {
            bail!("no valid IPv4/IPv6 addresses found in the input");
        }
        info!("Extracted {} unique addresses", identifiers.len());

        let store = FileStore::new(&config.mapping_path, std::env::var(ADMIN_TOKEN_ENV).ok());
        let resolver = MappingResolver::load(&store);

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let client = EnrichmentClient::new(http, config.endpoint.clone());

        let session = BatchSession::new();
        let run = session
            .submit(&client, &api_key, &identifiers)
            .await
            .context("a batch is already in flight on this session")?;

        // The freshest concrete quota number wins; keys whose responses
        // never carry one leave the signal explicitly unknown.
        let quota = run
            .results
            .iter()
            .rev()
            .find_map(|result| match result {
                LookupResult::Success(e) if e.quota.is_known() => Some(e.quota),
                _ => None,
            })
            .unwrap_or(QuotaSignal::Unknown);

        let groups = group_results(&run.results, &resolver);
        let stats = summarize(&run.results);
        let rows = build_rows(&run.results, &resolver);

        let mut exports = Vec::new();
        for format in &config.export {
            let path = export_rows(&rows, *format, &config.output_dir)
                .with_context(|| format!("Failed to export {:?} report", format))?;
            exports.push(path);
        }

        Ok(EnrichmentReport {
            stats,
            quota,
            groups,
            rows,
            exports,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
