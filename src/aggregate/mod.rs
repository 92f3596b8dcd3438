//! Result aggregation.
//!
//! Groups completed lookups by resolved locale label, computes the summary
//! counts, and (via [`row`]) flattens results into exportable rows. The
//! grouped view is rebuilt from scratch every time; it is never patched
//! incrementally.

mod row;

pub use row::{build_rows, ExportRow};
pub(crate) use row::ROW_HEADERS;

use crate::enrichment::LookupResult;
use crate::mapping::{MappingKind, MappingResolver};

/// Sentinel group label for failed lookups.
///
/// All failures land in this one bucket regardless of their error message so
/// they stay visually segregated from the geographic groups.
pub const FAILED_BUCKET: &str = "Lookup failed";

/// Placeholder label for successes without a usable country name.
const UNRESOLVED_LABEL: &str = "-";

/// One display group: a label and the results that share it.
#[derive(Debug, Clone)]
pub struct Group {
    /// Resolved locale label, or [`FAILED_BUCKET`].
    pub label: String,
    /// Results in arrival order.
    pub entries: Vec<LookupResult>,
}

/// Summary counts over one result set.
///
/// Failed lookups count toward `total` but are excluded from the
/// direct/proxy split, so `total == direct + proxy + failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    /// All results.
    pub total: usize,
    /// Successes not flagged as proxies.
    pub direct: usize,
    /// Successes flagged as proxies.
    pub proxy: usize,
    /// Failed lookups.
    pub failed: usize,
}

/// Resolves the group label for one result.
fn group_label(result: &LookupResult, resolver: &MappingResolver) -> String {
    match result {
        LookupResult::Failure { .. } => FAILED_BUCKET.to_string(),
        LookupResult::Success(e) => match e.country.as_deref() {
            Some(country) if !country.is_empty() => {
                resolver.resolve(MappingKind::Locale, country)
            }
            _ => UNRESOLVED_LABEL.to_string(),
        },
    }
}

/// Builds the grouped view.
///
/// Groups appear in first-occurrence order of their label; entries within a
/// group keep the order the results arrived in.
pub fn group_results(results: &[LookupResult], resolver: &MappingResolver) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for result in results {
        let label = group_label(result, resolver);
        match groups.iter().position(|g| g.label == label) {
            Some(index) => groups[index].entries.push(result.clone()),
            None => groups.push(Group {
                label,
                entries: vec![result.clone()],
            }),
        }
    }
    groups
}

/// Computes the summary counts.
pub fn summarize(results: &[LookupResult]) -> SummaryStats {
    let mut stats = SummaryStats {
        total: results.len(),
        direct: 0,
        proxy: 0,
        failed: 0,
    };
    for result in results {
        match result {
            LookupResult::Success(e) if e.is_proxy => stats.proxy += 1,
            LookupResult::Success(_) => stats.direct += 1,
            LookupResult::Failure { .. } => stats.failed += 1,
        }
    }
    stats
}
