mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_to_original_url() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com", Some("go2home")).await;

    let response = server.get("/go2home").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com/page?q=1", Some("click01")).await;

    server.get("/click01").await;

    let json = server.get("/api/links/click01").await.json::<Value>();
    assert_eq!(json["clicks"], 1);
    assert!(json["lastClickedAt"].is_string());
}

#[tokio::test]
async fn test_redirect_preserves_url_verbatim() {
    let server = common::memory_server();
    let url = "https://Example.com/Path/?b=2&a=1#frag";
    common::create_link(&server, url, Some("verbat1")).await;

    let response = server.get("/verbat1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_repeated_redirects_count_every_click() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com", Some("many01")).await;

    for _ in 0..10 {
        assert_eq!(server.get("/many01").await.status_code(), 302);
    }

    let json = server.get("/api/links/many01").await.json::<Value>();
    assert_eq!(json["clicks"], 10);
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = common::memory_server();

    let response = server.get("/nope123").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Short link not found" })
    );
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com", Some("gone01")).await;
    server.delete("/api/links/gone01").await;

    server.get("/gone01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com/lower", Some("abcdef")).await;
    common::create_link(&server, "https://example.com/upper", Some("ABCDEF")).await;

    let lower = server.get("/abcdef").await;
    let upper = server.get("/ABCDEF").await;

    assert_eq!(lower.header("location"), "https://example.com/lower");
    assert_eq!(upper.header("location"), "https://example.com/upper");
}

#[tokio::test]
async fn test_stats_reads_do_not_count_as_clicks() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com", Some("read01")).await;

    server.get("/api/links/read01").await;
    server.get("/api/links").await;

    let json = server.get("/api/links/read01").await.json::<Value>();
    assert_eq!(json["clicks"], 0);
    assert!(json["lastClickedAt"].is_null());
}

#[tokio::test]
async fn test_healthz_is_not_treated_as_code() {
    let server = common::memory_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["ok"], true);
}

#[tokio::test]
async fn test_redirect_encodes_spaces_in_location() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com/a b?q=x y", Some("space01")).await;

    let response = server.get("/space01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/a%20b?q=x%20y"
    );
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_in_location() {
    let server = common::memory_server();
    common::create_link(&server, "https://example.com/café", Some("utf8url")).await;

    let response = server.get("/utf8url").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}
