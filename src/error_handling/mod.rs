//! Error handling.
//!
//! Error types are split along propagation boundaries:
//! - **Configuration errors** abort a run before any network call
//! - **Store errors** degrade to defaults on read, surface on write
//! - **Admin errors** reject conflicting mutations
//! - **Per-identifier errors** never appear here; they become failure results

mod types;

// Re-export public API
pub use types::{AdminError, ConfigError, InitializationError, StoreError};
