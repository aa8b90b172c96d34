//! Tests for SQLite pool construction and the connectivity probe.

use super::test_support::apply_schema;
use crate::db::{Cliente, ClienteRepository, Database, DatabaseConfig, DbError, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn in_memory_database_answers_probe() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    assert!(db.probe().await);
}

#[tokio::test(flavor = "multi_thread")]
async fn probe_is_false_after_close() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.close().await;

    assert!(!db.probe().await);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("farmacia.db");
    assert!(!path.exists());

    let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
    assert!(db.probe().await);
    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn connect_uses_config_url() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.db");
    SqliteDatabase::open(&path).await.unwrap().close().await;

    let config = DatabaseConfig::default()
        .with_url(format!("sqlite://{}", path.display()))
        .with_max_connections(2);

    let db = SqliteDatabase::connect(&config)
        .await
        .expect("Connect should succeed");
    assert!(db.probe().await);
}

#[tokio::test(flavor = "multi_thread")]
async fn connect_to_missing_file_fails_without_creating_it() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("typo.db");
    let config = DatabaseConfig::default().with_url(format!("sqlite://{}", path.display()));

    let result = SqliteDatabase::connect(&config).await;

    assert!(matches!(result, Err(DbError::Connection { .. })));
    assert!(!path.exists(), "connect must not create the database");
}

#[tokio::test(flavor = "multi_thread")]
async fn connect_rejects_malformed_url() {
    let config = DatabaseConfig::default().with_url("postgres://not-sqlite");

    let result = SqliteDatabase::connect(&config).await;
    assert!(matches!(result, Err(DbError::Configuration { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_pools() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("persist.db");

    {
        let db = SqliteDatabase::open(&path).await.unwrap();
        apply_schema(&db).await;
        db.clientes()
            .register(&Cliente::new("carla", "321", "1970-07-07", "c@c.com", "5"))
            .await
            .expect("Register should succeed");
        db.close().await;
    }

    let db = SqliteDatabase::open(&path).await.unwrap();
    let found = db.clientes().find_by_cpf("321").await.unwrap();
    assert_eq!(found.map(|c| c.nome().to_string()), Some("CARLA".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn connect_rejects_empty_pool() {
    let config = DatabaseConfig::default()
        .with_url("sqlite::memory:")
        .with_max_connections(0);

    let result = SqliteDatabase::connect(&config).await;
    assert!(matches!(result, Err(DbError::Configuration { .. })));
}
