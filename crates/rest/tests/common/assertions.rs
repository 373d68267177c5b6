//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use std::collections::HashSet;

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response is a client error (4xx).
pub fn assert_client_error(response: &TestResponse) {
    let status = response.status_code().as_u16();
    assert!(
        (400..500).contains(&status),
        "Expected client error status, got {}",
        status
    );
}

/// Asserts that the response has a Location header.
pub fn assert_has_location(response: &TestResponse) {
    assert!(
        response.headers().contains_key("location"),
        "Expected Location header"
    );
}

/// Asserts that the response is JSON.
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "Expected application/json, got {}",
        content_type
    );
}

/// Asserts that the body is a course with the given id and name.
pub fn assert_course(body: &Value, id: i64, name: &str) {
    assert_eq!(body["id"].as_i64(), Some(id), "Unexpected id in {}", body);
    assert_eq!(body["name"].as_str(), Some(name), "Unexpected name in {}", body);
}

/// Returns the ids of a list response body.
pub fn ids_of(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|c| c["id"].as_i64().expect("Course without integer id"))
        .collect()
}

/// Returns the names of a list response body.
pub fn names_of(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|c| c["name"].as_str().expect("Course without name").to_string())
        .collect()
}

/// Asserts that a list response holds exactly the given ids, in any order.
pub fn assert_id_set(body: &Value, expected: &[i64]) {
    let actual: HashSet<i64> = ids_of(body).into_iter().collect();
    let expected: HashSet<i64> = expected.iter().copied().collect();
    assert_eq!(actual, expected);
}

/// Asserts a `{"detail": ...}` error body.
pub fn assert_detail(body: &Value, expected: &str) {
    assert_eq!(
        body["detail"].as_str(),
        Some(expected),
        "Unexpected error body {}",
        body
    );
}

/// Asserts a `{"<field>": ["<message>"]}` error body.
pub fn assert_field_error(body: &Value, field: &str, expected: &str) {
    assert_eq!(
        body[field][0].as_str(),
        Some(expected),
        "Unexpected error body {}",
        body
    );
}
