//! Identifier extraction.
//!
//! Scans free-form text for IPv4/IPv6 literals and returns them deduplicated
//! in first-occurrence order. Matching is purely lexical: no DNS resolution or
//! reachability checks are performed here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Dotted-quad with octet values capped at 255. `\b` keeps the pattern from
/// matching inside longer digit runs.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
    )
    .expect("IPv4 pattern must compile")
});

/// IPv6 forms, ordered so that compressed addresses with a suffix are tried
/// before their suffix-less prefixes; with leftmost-first alternation the
/// reverse order would truncate `2001:db8::1` to `2001:db8::`.
///
/// Covered forms: link-local with zone id, full 8-group, IPv4-embedded,
/// `::`-compressed (leading, inner, trailing), and bare `::`.
static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const V4: &str = r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
    let pattern = format!(
        concat!(
            r"fe80:(?::[0-9A-Fa-f]{{0,4}}){{0,4}}%[0-9A-Za-z]+",
            r"|(?:[0-9A-Fa-f]{{1,4}}:){{7}}[0-9A-Fa-f]{{1,4}}",
            r"|(?:[0-9A-Fa-f]{{1,4}}:){{6}}{v4}",
            r"|(?:[0-9A-Fa-f]{{1,4}}:)+:(?:[0-9A-Fa-f]{{1,4}}:)*(?:{v4}|[0-9A-Fa-f]{{1,4}})",
            r"|::(?:[0-9A-Fa-f]{{1,4}}:)*(?:{v4}|[0-9A-Fa-f]{{1,4}})",
            r"|(?:[0-9A-Fa-f]{{1,4}}:)+:",
            r"|::",
        ),
        v4 = V4
    );
    Regex::new(&pattern).expect("IPv6 pattern must compile")
});

/// Extracts IPv4/IPv6 literals from arbitrary text.
///
/// Returns a duplicate-free sequence ordered by first occurrence in the input.
/// IPv6 literals are lowercased so that case variants of the same address
/// deduplicate to a single identifier. Empty input or input without any
/// address yields an empty vector, not an error; callers that need to tell
/// the user "nothing to do" must check for emptiness themselves.
pub fn extract_ips(text: &str) -> Vec<String> {
    let mut matches: Vec<(usize, String)> = Vec::new();

    for m in IPV4_PATTERN.find_iter(text) {
        matches.push((m.start(), m.as_str().to_string()));
    }
    for m in IPV6_PATTERN.find_iter(text) {
        matches.push((m.start(), m.as_str().to_ascii_lowercase()));
    }

    matches.sort_by_key(|(start, _)| *start);

    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter_map(|(_, ip)| seen.insert(ip.clone()).then_some(ip))
        .collect()
}

#[cfg(test)]
mod tests;
