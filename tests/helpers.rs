// Shared test helpers for mocking the enrichment service and building fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ip_enrich::EnrichmentClient;

/// Builds an enrichment client pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn test_client(server: &MockServer) -> EnrichmentClient {
    EnrichmentClient::new(reqwest::Client::new(), server.uri())
}

/// JSON body the mock service returns for a successful lookup.
#[allow(dead_code)]
pub fn success_body(ip: &str, country: &str, is_proxy: bool) -> serde_json::Value {
    json!({
        "ip": ip,
        "country_code": "XX",
        "country_name": country,
        "region_name": "Region",
        "city_name": "City",
        "usage_type": "DCH",
        "is_proxy": is_proxy,
        "asn": "64500",
        "as": "Example Networks"
    })
}

/// Mounts a success response for one specific address.
///
/// Specific mocks must be mounted before any catch-all; wiremock answers
/// with the first mounted mock that matches.
#[allow(dead_code)]
pub async fn mount_success(server: &MockServer, ip: &str, country: &str, is_proxy: bool) {
    Mock::given(method("GET"))
        .and(query_param("ip", ip))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(ip, country, is_proxy)))
        .mount(server)
        .await;
}

/// Mounts a success response carrying a quota header for one address.
#[allow(dead_code)]
pub async fn mount_success_with_header(
    server: &MockServer,
    ip: &str,
    header_name: &str,
    header_value: &str,
) {
    Mock::given(method("GET"))
        .and(query_param("ip", ip))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body(ip, "United States", false))
                .insert_header(header_name, header_value),
        )
        .mount(server)
        .await;
}

/// Mounts a service-reported error (2xx status with an error payload) for one address.
#[allow(dead_code)]
pub async fn mount_service_error(server: &MockServer, ip: &str, message: &str) {
    Mock::given(method("GET"))
        .and(query_param("ip", ip))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"error_code": 10001, "error_message": message}
        })))
        .mount(server)
        .await;
}

/// Mounts a catch-all success response for every address.
#[allow(dead_code)]
pub async fn mount_success_for_all(server: &MockServer, country: &str) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_body("0.0.0.0", country, false)),
        )
        .mount(server)
        .await;
}

/// Generates `count` distinct private-range addresses.
#[allow(dead_code)]
pub fn addresses(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("10.0.0.{}", i + 1)).collect()
}
