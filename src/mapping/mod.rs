//! Mapping tables and resolution.
//!
//! Two independent translation tables turn raw codes from the enrichment
//! service into display labels: locale names (`i18n`) and usage-type codes
//! (`usageTypeMap`). The serialized field names match the store document
//! shape, so documents written by earlier deployments load unchanged.
//!
//! The resolver used on the enrichment path is read-only; mutation goes
//! through the administrative operations in [`admin`].

mod defaults;
mod store;

pub mod admin;

pub use defaults::default_table;
pub use store::{FileStore, MappingStore, MemoryStore};

use std::collections::BTreeMap;
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::MAPPING_STORE_KEY;
use crate::error_handling::StoreError;

/// Which of the two translation tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MappingKind {
    /// Raw geographic name to display name.
    Locale,
    /// Usage-type code to display label.
    Usage,
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingKind::Locale => f.write_str("locale"),
            MappingKind::Usage => f.write_str("usage"),
        }
    }
}

/// The two translation tables, as stored.
///
/// Keys are unique within a table; values are free-form display strings. An
/// entry may legitimately map a code to itself when no translation exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    /// Locale-name entries.
    #[serde(default, rename = "i18n")]
    pub locale: BTreeMap<String, String>,

    /// Usage-type entries.
    #[serde(default, rename = "usageTypeMap")]
    pub usage: BTreeMap<String, String>,
}

impl MappingTable {
    /// Looks up the label stored for `code`, if any.
    pub fn get(&self, kind: MappingKind, code: &str) -> Option<&str> {
        self.entries(kind).get(code).map(String::as_str)
    }

    /// The entries of one table.
    pub fn entries(&self, kind: MappingKind) -> &BTreeMap<String, String> {
        match kind {
            MappingKind::Locale => &self.locale,
            MappingKind::Usage => &self.usage,
        }
    }

    pub(crate) fn entries_mut(&mut self, kind: MappingKind) -> &mut BTreeMap<String, String> {
        match kind {
            MappingKind::Locale => &mut self.locale,
            MappingKind::Usage => &mut self.usage,
        }
    }

    /// True when both tables hold no entries.
    pub fn is_empty(&self) -> bool {
        self.locale.is_empty() && self.usage.is_empty()
    }
}

/// Loads the mapping table from the store, falling back to the compiled-in
/// defaults when the store is unreachable, malformed, or empty.
///
/// Enrichment must never block on mapping availability, so this function
/// cannot fail; degraded loads are logged instead.
pub fn load_table_or_default(store: &dyn MappingStore) -> MappingTable {
    match store.get(MAPPING_STORE_KEY) {
        Ok(Some(value)) => match serde_json::from_value::<MappingTable>(value) {
            Ok(table) if !table.is_empty() => table,
            Ok(_) => {
                info!("mapping store is empty; using the built-in default table");
                default_table()
            }
            Err(e) => {
                warn!("mapping document did not parse ({}); using the built-in default table", e);
                default_table()
            }
        },
        Ok(None) => {
            info!("no mapping document in store; using the built-in default table");
            default_table()
        }
        Err(e) => {
            warn!("mapping store read failed ({}); using the built-in default table", e);
            default_table()
        }
    }
}

/// Read-only label resolution for the enrichment path.
///
/// Loaded once per session. Unknown codes resolve to themselves so the
/// output never shows a blank where a label belongs.
#[derive(Debug, Clone)]
pub struct MappingResolver {
    table: MappingTable,
}

impl MappingResolver {
    /// Wraps an already-loaded table.
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }

    /// Loads the table from `store` with default fallback.
    pub fn load(store: &dyn MappingStore) -> Self {
        Self::new(load_table_or_default(store))
    }

    /// Resolves `code` to its display label, or passes it through unchanged.
    pub fn resolve(&self, kind: MappingKind, code: &str) -> String {
        self.table
            .get(kind, code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    /// The underlying table.
    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}
