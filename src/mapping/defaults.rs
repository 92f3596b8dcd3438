//! Compiled-in fallback mapping table.
//!
//! Used whenever the mapping store is unreachable, malformed, or empty so
//! that enrichment never blocks on mapping availability. Covers the most
//! common countries and the IP2Location usage-type codes.

use super::MappingTable;

/// Default locale-name entries (raw geographic name to display name).
const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("United States", "美国"),
    ("United Kingdom", "英国"),
    ("Germany", "德国"),
    ("France", "法国"),
    ("China", "中国"),
    ("Hong Kong", "中国香港"),
    ("Taiwan", "中国台湾"),
    ("Japan", "日本"),
    ("Singapore", "新加坡"),
    ("South Korea", "韩国"),
    ("Russia", "俄罗斯"),
    ("Australia", "澳大利亚"),
];

/// Default usage-type entries (code to display label).
const DEFAULT_USAGE_TYPES: &[(&str, &str)] = &[
    ("COM", "商业宽带"),
    ("ORG", "组织机构"),
    ("ISP", "家庭宽带"),
    ("MOB", "移动流量"),
    ("DCH", "数据中心/机房"),
    ("CDN", "CDN节点"),
    ("EDU", "教育网"),
    ("GOV", "政府"),
    ("SES", "爬虫"),
];

/// Builds the compiled-in default table.
pub fn default_table() -> MappingTable {
    MappingTable {
        locale: DEFAULT_LOCALES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        usage: DEFAULT_USAGE_TYPES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingKind;

    #[test]
    fn test_default_table_is_populated() {
        let table = default_table();
        assert!(!table.is_empty());
        assert_eq!(table.entries(MappingKind::Locale).len(), DEFAULT_LOCALES.len());
        assert_eq!(
            table.entries(MappingKind::Usage).len(),
            DEFAULT_USAGE_TYPES.len()
        );
    }

    #[test]
    fn test_default_table_covers_data_center_code() {
        let table = default_table();
        assert!(table.get(MappingKind::Usage, "DCH").is_some());
        assert!(table.get(MappingKind::Locale, "United States").is_some());
    }
}
