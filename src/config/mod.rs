//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (chunk size, pacing, endpoints, etc.)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Command, Config, ExportOpt, LogFormat, LogLevel, MappingAction, MappingKindOpt, Opt,
};
