//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//! Per-identifier lookup problems (network failures, non-2xx responses,
//! service-reported errors) are deliberately *not* represented here: they are
//! folded into `LookupResult::Failure` so a batch run keeps going. The enums
//! below cover everything that is allowed to stop an operation outright.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::mapping::MappingKind;

/// Pre-flight configuration failures.
///
/// These abort a run before any lookup is attempted.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key was supplied and none is configured in the environment.
    #[error("no API key available: pass --api-key or set {0}")]
    MissingCredential(&'static str),
}

/// Mapping store failures.
///
/// Read failures are recovered by substituting the compiled-in default table;
/// write failures are surfaced to the administrative caller.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or read.
    #[error("mapping store unavailable: {0}")]
    Unavailable(String),

    /// The store returned a document that could not be parsed.
    #[error("mapping store document is malformed: {0}")]
    Malformed(String),

    /// A write was attempted without a valid administrative token.
    #[error("mapping store write rejected: admin token missing or incorrect")]
    Unauthorized,

    /// A write was authorized but failed.
    #[error("mapping store write failed: {0}")]
    WriteFailed(String),
}

/// Administrative mutation failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdminError {
    /// A rename would overwrite a different existing entry.
    #[error("cannot rename {kind} entry \"{from}\" to \"{to}\": that code already exists")]
    Conflict {
        /// Table the rename targeted.
        kind: MappingKind,
        /// Code being renamed.
        from: String,
        /// Requested new code.
        to: String,
    },

    /// An add would duplicate an existing entry.
    #[error("a {kind} entry with code \"{code}\" already exists")]
    Duplicate {
        /// Table the add targeted.
        kind: MappingKind,
        /// Code that already exists.
        code: String,
    },

    /// The referenced entry does not exist.
    #[error("no {kind} entry with code \"{code}\"")]
    UnknownCode {
        /// Table the operation targeted.
        kind: MappingKind,
        /// Code that was not found.
        code: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
