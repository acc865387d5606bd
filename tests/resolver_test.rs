//! Release resolver behavior against a mock index.

use httpmock::prelude::*;
use pocketstack::release::ReleaseClient;

#[test]
fn latest_returns_the_tag_without_its_v_prefix() {
    let server = MockServer::start();
    let index = server.mock(|when, then| {
        when.method(GET).path("/releases/latest");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "tag_name": "v0.25.2",
                "html_url": "https://example.com/releases/v0.25.2"
            }));
    });

    let client = ReleaseClient::with_index_url(server.url("/releases/latest"));
    assert_eq!(client.latest(), Some("0.25.2".to_string()));
    index.assert();
}

#[test]
fn server_error_degrades_to_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/releases/latest");
        then.status(500);
    });

    let client = ReleaseClient::with_index_url(server.url("/releases/latest"));
    assert!(client.latest().is_none());
}

#[test]
fn missing_tag_field_degrades_to_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/releases/latest");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "name": "a release without a tag" }));
    });

    let client = ReleaseClient::with_index_url(server.url("/releases/latest"));
    assert!(client.latest().is_none());
}

#[test]
fn non_json_body_degrades_to_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/releases/latest");
        then.status(200).body("<html>rate limited</html>");
    });

    let client = ReleaseClient::with_index_url(server.url("/releases/latest"));
    assert!(client.latest().is_none());
}

#[test]
fn untrimmed_tags_pass_through_unchanged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/releases/latest");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "tag_name": "0.26.0" }));
    });

    let client = ReleaseClient::with_index_url(server.url("/releases/latest"));
    assert_eq!(client.latest(), Some("0.26.0".to_string()));
}
