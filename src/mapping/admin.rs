//! Administrative mapping mutations.
//!
//! These operations edit a loaded [`MappingTable`] in memory; persisting the
//! result goes back through the store with the administrative token. The
//! enrichment path never calls into this module.

use serde_json::json;

use crate::config::MAPPING_STORE_KEY;
use crate::error_handling::{AdminError, StoreError};

use super::{MappingKind, MappingStore, MappingTable};

/// Adds a new entry. Duplicate codes are rejected.
pub fn add_entry(
    table: &mut MappingTable,
    kind: MappingKind,
    code: &str,
    label: &str,
) -> Result<(), AdminError> {
    let entries = table.entries_mut(kind);
    if entries.contains_key(code) {
        return Err(AdminError::Duplicate {
            kind,
            code: code.to_string(),
        });
    }
    entries.insert(code.to_string(), label.to_string());
    Ok(())
}

/// Changes an entry's code, keeping its label.
///
/// Renaming onto a different existing code is a conflict: the operation is
/// rejected and both entries are left unchanged. Renaming an entry to its own
/// code is a no-op.
pub fn rename_entry(
    table: &mut MappingTable,
    kind: MappingKind,
    old: &str,
    new: &str,
) -> Result<(), AdminError> {
    if old == new {
        return Ok(());
    }
    let entries = table.entries_mut(kind);
    if !entries.contains_key(old) {
        return Err(AdminError::UnknownCode {
            kind,
            code: old.to_string(),
        });
    }
    if entries.contains_key(new) {
        return Err(AdminError::Conflict {
            kind,
            from: old.to_string(),
            to: new.to_string(),
        });
    }
    let label = entries
        .remove(old)
        .unwrap_or_default();
    entries.insert(new.to_string(), label);
    Ok(())
}

/// Removes an entry.
pub fn remove_entry(
    table: &mut MappingTable,
    kind: MappingKind,
    code: &str,
) -> Result<(), AdminError> {
    if table.entries_mut(kind).remove(code).is_none() {
        return Err(AdminError::UnknownCode {
            kind,
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Persists the table through the store under the mapping document key.
pub fn save_table(
    store: &dyn MappingStore,
    table: &MappingTable,
    token: &str,
) -> Result<(), StoreError> {
    // MappingTable serialization is infallible (string maps only), so any
    // failure here is a store failure.
    save_document(store, &json!(table), token)
}

fn save_document(
    store: &dyn MappingStore,
    value: &serde_json::Value,
    token: &str,
) -> Result<(), StoreError> {
    store.put(MAPPING_STORE_KEY, value, token)
}
