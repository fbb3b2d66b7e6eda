#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use tinylink::routes::{RouterSettings, build_router};
use tinylink::state::AppState;

pub fn server_with_repository(repository: Arc<dyn LinkRepository>) -> TestServer {
    let app = build_router(AppState::new(repository), &RouterSettings::default());
    TestServer::new(app).unwrap()
}

/// Full router backed by a fresh in-memory store.
pub fn memory_server() -> TestServer {
    server_with_repository(Arc::new(MemoryLinkRepository::new()))
}

/// Full router backed by Postgres.
pub fn pg_server(pool: PgPool) -> TestServer {
    server_with_repository(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Creates a link through the API and returns the JSON body.
pub async fn create_link(server: &TestServer, url: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "url": url, "shortCode": code }),
        None => json!({ "url": url }),
    };

    let response = server.post("/api/links").json(&body).await;
    assert_eq!(response.status_code(), 201, "{}", response.text());
    response.json::<Value>()
}

pub fn is_alphanumeric_code(code: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric())
}

pub async fn insert_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (short_code, original_url) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
