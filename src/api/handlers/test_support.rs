//! Helpers for driving the router in handler tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::SqliteDatabase;
use crate::db::sqlite::test_support::setup_db;

/// Router over a fresh in-memory database with the schema applied
pub(crate) async fn test_app() -> Router {
    app_with(setup_db().await)
}

pub(crate) fn app_with(db: SqliteDatabase) -> Router {
    routes::create_router(AppState::new(db), false)
}

/// Router whose pool has been closed, so any statement fails to connect
pub(crate) async fn unreachable_app() -> Router {
    let db = setup_db().await;
    db.close().await;
    app_with(db)
}

pub(crate) async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub(crate) async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, serde_json::to_vec(body).unwrap()).await
}

pub(crate) async fn post_raw(app: &Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
