//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_ENDPOINT, DEFAULT_MAPPING_PATH, HTTP_TIMEOUT_SECS,
};
use crate::export::ExportFormat;
use crate::mapping::MappingKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export selection on the command line.
///
/// `Both` expands to CSV and XLSX.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportOpt {
    /// Delimited-text report
    Csv,
    /// Spreadsheet report
    Xlsx,
    /// Both CSV and XLSX
    Both,
}

impl ExportOpt {
    /// Expands the CLI selection into concrete export formats.
    pub fn formats(&self) -> Vec<ExportFormat> {
        match self {
            ExportOpt::Csv => vec![ExportFormat::Csv],
            ExportOpt::Xlsx => vec![ExportFormat::Xlsx],
            ExportOpt::Both => vec![ExportFormat::Csv, ExportFormat::Xlsx],
        }
    }
}

/// Mapping kind selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MappingKindOpt {
    /// Locale-name mapping (raw geographic name to display name)
    Locale,
    /// Usage-type mapping (usage code to display label)
    Usage,
}

impl From<MappingKindOpt> for MappingKind {
    fn from(k: MappingKindOpt) -> Self {
        match k {
            MappingKindOpt::Locale => MappingKind::Locale,
            MappingKindOpt::Usage => MappingKind::Usage,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through argument parsing.
///
/// # Examples
///
/// ```no_run
/// use ip_enrich::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("addresses.txt"),
///     api_key: Some("demo-key".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read free-form text from (`-` for stdin)
    pub input: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// API key for the enrichment service; takes precedence over the
    /// `IP2LOCATION_API_KEY` environment variable
    pub api_key: Option<String>,

    /// Enrichment service endpoint
    pub endpoint: String,

    /// Path of the mapping store document
    pub mapping_path: PathBuf,

    /// Report formats to write after the run
    pub export: Vec<ExportFormat>,

    /// Directory exported reports are written to
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            export: Vec::new(),
            output_dir: PathBuf::from("."),
            timeout_seconds: HTTP_TIMEOUT_SECS,
        }
    }
}

/// Command-line options.
///
/// The default invocation reads text, extracts addresses, and runs the
/// enrichment batch; the `mapping` subcommand edits the translation tables.
#[derive(Debug, Parser)]
#[command(name = "ip_enrich", version, about = "Batch-enrich IP addresses with geolocation and usage metadata")]
pub struct Opt {
    /// File containing free-form text with IP addresses, or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// API key for the enrichment service (falls back to IP2LOCATION_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Enrichment service endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Path of the mapping store document
    #[arg(long, default_value = DEFAULT_MAPPING_PATH)]
    pub mapping_path: PathBuf,

    /// Write a report after the run
    #[arg(long, value_enum)]
    pub export: Option<ExportOpt>,

    /// Directory exported reports are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Administrative token authorizing mapping store writes
    #[arg(long)]
    pub admin_token: Option<String>,

    /// Subcommand (default: run an enrichment batch)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Opt {
    /// Builds the library [`Config`] from the parsed options.
    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            mapping_path: self.mapping_path.clone(),
            export: self.export.map(|e| e.formats()).unwrap_or_default(),
            output_dir: self.output_dir.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or edit the mapping tables
    Mapping {
        /// Mapping operation
        #[command(subcommand)]
        action: MappingAction,
    },
}

/// Administrative mapping operations.
#[derive(Debug, Subcommand)]
pub enum MappingAction {
    /// Print the current mapping tables
    Show {
        /// Print the raw store document as JSON (suitable for backups)
        #[arg(long)]
        json: bool,
    },
    /// Add a new entry
    Add {
        /// Which table to edit
        #[arg(value_enum)]
        kind: MappingKindOpt,
        /// Raw code (e.g. a country name or usage-type code)
        code: String,
        /// Display label
        label: String,
    },
    /// Change an entry's code, refusing to overwrite an existing entry
    Rename {
        /// Which table to edit
        #[arg(value_enum)]
        kind: MappingKindOpt,
        /// Existing code
        old: String,
        /// New code
        new: String,
    },
    /// Remove an entry
    Remove {
        /// Which table to edit
        #[arg(value_enum)]
        kind: MappingKindOpt,
        /// Code to remove
        code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_export_opt_expansion() {
        assert_eq!(ExportOpt::Csv.formats(), vec![ExportFormat::Csv]);
        assert_eq!(ExportOpt::Xlsx.formats(), vec![ExportFormat::Xlsx]);
        assert_eq!(
            ExportOpt::Both.formats(),
            vec![ExportFormat::Csv, ExportFormat::Xlsx]
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("-"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, HTTP_TIMEOUT_SECS);
        assert!(config.export.is_empty());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_cli_parses_scan_invocation() {
        let opt = Opt::try_parse_from([
            "ip_enrich",
            "addresses.txt",
            "--export",
            "both",
            "--api-key",
            "k",
        ])
        .expect("scan invocation should parse");
        let config = opt.to_config();
        assert_eq!(config.input, PathBuf::from("addresses.txt"));
        assert_eq!(
            config.export,
            vec![ExportFormat::Csv, ExportFormat::Xlsx]
        );
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_parses_mapping_rename() {
        let opt = Opt::try_parse_from([
            "ip_enrich",
            "mapping",
            "rename",
            "locale",
            "US",
            "United States",
        ])
        .expect("mapping invocation should parse");
        match opt.command {
            Some(Command::Mapping {
                action: MappingAction::Rename { kind, old, new },
            }) => {
                assert!(matches!(kind, MappingKindOpt::Locale));
                assert_eq!(old, "US");
                assert_eq!(new, "United States");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
