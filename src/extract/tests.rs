use super::*;

#[test]
fn test_extracts_ipv4_and_ipv6_dropping_invalid_tokens() {
    let ips = extract_ips("8.8.8.8, not-an-ip, 2001:db8::1");
    assert_eq!(ips, vec!["8.8.8.8", "2001:db8::1"]);
}

#[test]
fn test_empty_input_yields_empty_sequence() {
    assert!(extract_ips("").is_empty());
    assert!(extract_ips("no addresses here").is_empty());
}

#[test]
fn test_rejects_ipv4_octets_above_255() {
    assert!(extract_ips("256.1.1.1").is_empty());
    assert!(extract_ips("999.999.999.999").is_empty());
    // 255 itself is the upper bound
    assert_eq!(extract_ips("255.255.255.255"), vec!["255.255.255.255"]);
}

#[test]
fn test_deduplicates_preserving_first_occurrence_order() {
    let ips = extract_ips("1.1.1.1 8.8.8.8 1.1.1.1 8.8.8.8 9.9.9.9");
    assert_eq!(ips, vec!["1.1.1.1", "8.8.8.8", "9.9.9.9"]);
}

#[test]
fn test_extraction_is_idempotent() {
    let text = "8.8.8.8 2001:db8::1 8.8.8.8";
    let once = extract_ips(text);
    let again = extract_ips(&once.join(" "));
    assert_eq!(once, again);
}

#[test]
fn test_ipv6_dedup_is_case_insensitive() {
    let ips = extract_ips("2001:DB8::1 and 2001:db8::1");
    assert_eq!(ips, vec!["2001:db8::1"]);
}

#[test]
fn test_ipv6_compressed_forms() {
    assert_eq!(extract_ips("loopback ::1"), vec!["::1"]);
    assert_eq!(extract_ips("addr 2001:db8:: end"), vec!["2001:db8::"]);
    assert_eq!(
        extract_ips("mid 1:2:3::4:5 end"),
        vec!["1:2:3::4:5"]
    );
}

#[test]
fn test_ipv6_full_form() {
    let ips = extract_ips("2001:0db8:85a3:0000:0000:8a2e:0370:7334");
    assert_eq!(ips, vec!["2001:0db8:85a3:0000:0000:8a2e:0370:7334"]);
}

#[test]
fn test_ipv6_ipv4_embedded_form() {
    let ips = extract_ips("mapped ::ffff:192.168.1.1");
    // The embedded dotted quad also matches the IPv4 pattern on its own;
    // both literals are reported, v6 first by position.
    assert_eq!(ips, vec!["::ffff:192.168.1.1", "192.168.1.1"]);
}

#[test]
fn test_ipv6_link_local_with_zone_id() {
    let ips = extract_ips("via fe80::1%eth0 egress");
    assert_eq!(ips, vec!["fe80::1%eth0"]);
}

#[test]
fn test_mixed_families_keep_text_order() {
    let ips = extract_ips("first 2001:db8::1 then 8.8.8.8 then ::1");
    assert_eq!(ips, vec!["2001:db8::1", "8.8.8.8", "::1"]);
}

#[test]
fn test_ignores_mac_addresses_and_timestamps() {
    assert!(extract_ips("mac 00:1A:2B:3C:4D:5E at 12:30:45").is_empty());
}

#[test]
fn test_every_match_survives_reextraction() {
    // Whatever comes out must itself be recognized as an address.
    let text = "8.8.8.8 junk 2001:db8::1 ::ffff:10.0.0.1 fe80::1%eth0 1.2.3.4";
    for ip in extract_ips(text) {
        assert!(
            extract_ips(&ip).contains(&ip),
            "extracted literal {} should re-extract to itself",
            ip
        );
    }
}
