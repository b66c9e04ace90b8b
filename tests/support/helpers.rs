// tests/support/helpers.rs
use super::mocks::FixedClock;
use article_board::application::services::ServiceContext;
use article_board::domain::article::ArticleStore;
use article_board::infrastructure::{
    database,
    repositories::{InMemoryArticleStore, SqliteArticleStore},
};
use article_board::presentation::http::{
    routes::build_router, state::HttpState, views::ViewRenderer,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, header};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn memory_store() -> Arc<InMemoryArticleStore> {
    Arc::new(InMemoryArticleStore::new(Arc::new(FixedClock)))
}

/// Fresh `sqlite::memory:` database with the schema applied. A single
/// connection keeps every query on the same in-memory database.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");
    Arc::new(pool)
}

/// In-memory database whose `article` table carries no `CHECK` constraints,
/// as a database file created by another tool might. Rows the domain would
/// refuse can be inserted directly.
pub async fn unchecked_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    sqlx::query(
        "CREATE TABLE article (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author VARCHAR(50) NOT NULL,
            title VARCHAR(100) NOT NULL,
            content TEXT,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&pool)
    .await
    .expect("create unchecked article table");
    Arc::new(pool)
}

pub async fn insert_raw_article(pool: &SqlitePool, author: &str, title: &str) {
    sqlx::query("INSERT INTO article (author, title, content, created_at) VALUES (?, ?, '', ?)")
        .bind(author)
        .bind(title)
        .bind(super::mocks::fixed_now())
        .execute(pool)
        .await
        .expect("insert raw article row");
}

pub async fn sqlite_store() -> Arc<SqliteArticleStore> {
    Arc::new(SqliteArticleStore::new(
        memory_pool().await,
        Arc::new(FixedClock),
    ))
}

pub fn router_with_store(store: Arc<dyn ArticleStore>) -> axum::Router {
    let services = Arc::new(ServiceContext::new(store));
    let views = Arc::new(ViewRenderer::new().expect("templates compile"));
    build_router(HttpState::new(services, views))
}

pub async fn make_test_router() -> axum::Router {
    router_with_store(sqlite_store().await)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(fields).expect("encode form");
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_text(resp: axum::response::Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
