//! Tests for SqliteClienteRepository.

use std::sync::Arc;

use super::test_support::setup_db;
use crate::db::{Cliente, ClienteRepository, Database, DbError};

fn ana() -> Cliente {
    Cliente::new("ana silva", "123", "2000-01-01", "a@a.com", "999")
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_on_empty_store_returns_empty_vec() {
    let db = setup_db().await;

    let clientes = db.clientes().list_all().await.expect("List should succeed");
    assert!(clientes.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn register_assigns_id_and_uppercases_name() {
    let db = setup_db().await;

    let registered = db
        .clientes()
        .register(&ana())
        .await
        .expect("Register should succeed");

    assert!(registered.is_persisted());
    assert_eq!(registered.nome(), "ANA SILVA");
    assert_eq!(registered.cpf(), "123");
    assert_eq!(registered.email(), "a@a.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn register_then_find_returns_uppercased_name() {
    let db = setup_db().await;
    let repo = db.clientes();

    let registered = repo.register(&ana()).await.expect("Register should succeed");

    let found = repo
        .find_by_cpf("123")
        .await
        .expect("Lookup should succeed")
        .expect("Cliente should exist");

    assert_eq!(found.nome(), "ANA SILVA");
    assert_eq!(found.id(), registered.id());
    assert_eq!(found.data_nascimento(), "2000-01-01");
    assert_eq!(found.telefone(), "999");
}

#[tokio::test(flavor = "multi_thread")]
async fn register_uppercases_accented_names() {
    let db = setup_db().await;
    let repo = db.clientes();

    let cliente = Cliente::new("joão açaí", "555", "1985-03-02", "j@a.com", "1");
    repo.register(&cliente).await.expect("Register should succeed");

    let found = repo.find_by_cpf("555").await.unwrap().unwrap();
    assert_eq!(found.nome(), "JOÃO AÇAÍ");
}

#[tokio::test(flavor = "multi_thread")]
async fn find_unknown_cpf_returns_none() {
    let db = setup_db().await;

    let found = db
        .clientes()
        .find_by_cpf("000")
        .await
        .expect("Lookup should succeed");
    assert!(found.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn find_matches_cpf_exactly() {
    let db = setup_db().await;
    let repo = db.clientes();
    repo.register(&ana()).await.unwrap();

    assert!(repo.find_by_cpf("12").await.unwrap().is_none());
    assert!(repo.find_by_cpf("1234").await.unwrap().is_none());
    assert!(repo.find_by_cpf(" 123").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_every_registered_cliente() {
    let db = setup_db().await;
    let repo = db.clientes();

    repo.register(&ana()).await.unwrap();
    repo.register(&Cliente::new("bia", "456", "1999-12-31", "b@b.com", "888"))
        .await
        .unwrap();

    let clientes = repo.list_all().await.expect("List should succeed");
    assert_eq!(clientes.len(), 2);
    assert!(clientes.iter().all(Cliente::is_persisted));
    assert!(clientes.iter().any(|c| c.nome() == "ANA SILVA"));
    assert!(clientes.iter().any(|c| c.nome() == "BIA"));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_cpf_is_a_constraint_error() {
    let db = setup_db().await;
    let repo = db.clientes();

    repo.register(&ana()).await.expect("First register should succeed");
    let err = repo
        .register(&Cliente::new("outra", "123", "2001-01-01", "o@o.com", "7"))
        .await
        .expect_err("Duplicate cpf should fail");

    assert!(matches!(err, DbError::Constraint { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_table_is_a_database_error() {
    let db = crate::db::SqliteDatabase::in_memory().await.unwrap();

    let err = db.clientes().list_all().await.expect_err("No schema");
    assert!(matches!(err, DbError::Database { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_pool_is_a_connection_error() {
    let db = setup_db().await;
    db.close().await;

    let err = db.clientes().list_all().await.expect_err("Pool is closed");
    assert!(err.is_connection());

    let err = db.clientes().find_by_cpf("123").await.expect_err("Pool is closed");
    assert!(err.is_connection());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_registers_with_distinct_cpfs_all_succeed() {
    let db = Arc::new(setup_db().await);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = Arc::clone(&db);
            tokio::spawn(async move {
                let cliente = Cliente::new(
                    format!("cliente {i}"),
                    format!("cpf-{i}"),
                    "2000-01-01",
                    "c@c.com",
                    "0",
                );
                db.clientes().register(&cliente).await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("Task should not panic")
            .expect("Register should succeed");
    }

    let clientes = db.clientes().list_all().await.unwrap();
    assert_eq!(clientes.len(), 8);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_registers_with_same_cpf_succeed_once() {
    let db = Arc::new(setup_db().await);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let db = Arc::clone(&db);
            tokio::spawn(async move {
                let cliente = Cliente::new(format!("dup {i}"), "777", "2000-01-01", "d@d.com", "0");
                db.clientes().register(&cliente).await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("Task should not panic") {
            Ok(_) => successes += 1,
            Err(e) => assert!(matches!(e, DbError::Constraint { .. })),
        }
    }

    assert_eq!(successes, 1);
}
