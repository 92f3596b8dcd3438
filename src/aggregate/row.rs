//! Flat export row building.
//!
//! Serializes the result set into fixed-column rows shared by every export
//! format. Building rows is a pure function of the results: it can be called
//! repeatedly without touching the underlying data.

use serde::Serialize;

use crate::enrichment::LookupResult;
use crate::mapping::{MappingKind, MappingResolver};

/// Column headers, in output order. Must stay in sync with the
/// [`ExportRow`] field order.
pub(crate) const ROW_HEADERS: [&str; 9] = [
    "ip", "status", "proxy", "country", "region", "city", "usage", "asn", "as_org",
];

/// One flattened result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Queried address.
    pub ip: String,
    /// `success` or `failed`.
    pub status: String,
    /// `yes` or `no`.
    pub proxy: String,
    /// Resolved country label.
    pub country: String,
    /// Resolved region label.
    pub region: String,
    /// Resolved city label.
    pub city: String,
    /// Resolved usage-type label.
    pub usage: String,
    /// Autonomous system number.
    pub asn: String,
    /// Autonomous system organization.
    pub as_org: String,
}

impl ExportRow {
    /// The row's cells in header order.
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.ip,
            &self.status,
            &self.proxy,
            &self.country,
            &self.region,
            &self.city,
            &self.usage,
            &self.asn,
            &self.as_org,
        ]
    }
}

fn resolve_or_blank(resolver: &MappingResolver, kind: MappingKind, raw: &Option<String>) -> String {
    match raw.as_deref() {
        Some(value) if !value.is_empty() => resolver.resolve(kind, value),
        _ => String::new(),
    }
}

/// Flattens results into export rows, one row per result in arrival order.
pub fn build_rows(results: &[LookupResult], resolver: &MappingResolver) -> Vec<ExportRow> {
    results
        .iter()
        .map(|result| match result {
            LookupResult::Success(e) => ExportRow {
                ip: e.ip.clone(),
                status: "success".to_string(),
                proxy: if e.is_proxy { "yes" } else { "no" }.to_string(),
                country: resolve_or_blank(resolver, MappingKind::Locale, &e.country),
                region: resolve_or_blank(resolver, MappingKind::Locale, &e.region),
                city: resolve_or_blank(resolver, MappingKind::Locale, &e.city),
                usage: resolve_or_blank(resolver, MappingKind::Usage, &e.usage_type),
                asn: e.asn.clone().unwrap_or_default(),
                as_org: e.as_org.clone().unwrap_or_default(),
            },
            LookupResult::Failure { ip, .. } => ExportRow {
                ip: ip.clone(),
                status: "failed".to_string(),
                proxy: "no".to_string(),
                country: String::new(),
                region: String::new(),
                city: String::new(),
                usage: String::new(),
                asn: String::new(),
                as_org: String::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{EnrichedIp, QuotaSignal};
    use crate::mapping::default_table;

    fn resolver() -> MappingResolver {
        MappingResolver::new(default_table())
    }

    fn sample_success() -> LookupResult {
        LookupResult::Success(EnrichedIp {
            ip: "8.8.8.8".into(),
            country_code: Some("US".into()),
            country: Some("United States".into()),
            region: Some("California".into()),
            city: Some("Mountain View".into()),
            usage_type: Some("DCH".into()),
            is_proxy: false,
            asn: Some("15169".into()),
            as_org: Some("Google LLC".into()),
            quota: QuotaSignal::Unknown,
        })
    }

    #[test]
    fn test_success_row_resolves_labels() {
        let rows = build_rows(&[sample_success()], &resolver());
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.status, "success");
        assert_eq!(row.proxy, "no");
        assert_eq!(row.country, "美国");
        // No translation entry: raw values pass through.
        assert_eq!(row.region, "California");
        assert_eq!(row.usage, "数据中心/机房");
        assert_eq!(row.asn, "15169");
        assert_eq!(row.as_org, "Google LLC");
    }

    #[test]
    fn test_failure_row_has_blank_data_columns() {
        let rows = build_rows(
            &[LookupResult::Failure {
                ip: "10.0.0.1".into(),
                message: "timeout".into(),
            }],
            &resolver(),
        );
        let row = &rows[0];
        assert_eq!(row.ip, "10.0.0.1");
        assert_eq!(row.status, "failed");
        assert_eq!(row.proxy, "no");
        assert_eq!(row.country, "");
        assert_eq!(row.usage, "");
    }

    #[test]
    fn test_one_row_per_result() {
        let results = vec![
            sample_success(),
            LookupResult::Failure {
                ip: "10.0.0.1".into(),
                message: "boom".into(),
            },
        ];
        assert_eq!(build_rows(&results, &resolver()).len(), results.len());
    }

    #[test]
    fn test_building_rows_is_pure_and_repeatable() {
        let results = vec![sample_success()];
        let r = resolver();
        assert_eq!(build_rows(&results, &r), build_rows(&results, &r));
    }

    #[test]
    fn test_cells_match_header_arity() {
        let rows = build_rows(&[sample_success()], &resolver());
        assert_eq!(rows[0].cells().len(), ROW_HEADERS.len());
    }

    #[test]
    fn test_missing_usage_code_displays_as_itself_via_passthrough() {
        let mut enriched = match sample_success() {
            LookupResult::Success(e) => e,
            _ => unreachable!(),
        };
        enriched.usage_type = Some("XYZ".into());
        let rows = build_rows(&[LookupResult::Success(enriched)], &resolver());
        assert_eq!(rows[0].usage, "XYZ");
    }
}
