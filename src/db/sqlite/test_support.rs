//! Fixtures shared by the SQLite and HTTP tests.

use super::SqliteDatabase;

const SCHEMA: &str = include_str!("../../../data/sql/sqlite/schema.sql");

/// In-memory database with the store schema applied.
pub(crate) async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    apply_schema(&db).await;
    db
}

pub(crate) async fn apply_schema(db: &SqliteDatabase) {
    sqlx::raw_sql(SCHEMA)
        .execute(db.pool())
        .await
        .expect("Schema should apply");
}

pub(crate) async fn insert_medicamento(
    db: &SqliteDatabase,
    nome: &str,
    fabricante: &str,
    principio_ativo: &str,
    data_validade: &str,
    preco: f64,
) {
    sqlx::query(
        "INSERT INTO medicamentos (nome, fabricante, principio_ativo, data_validade, preco) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(nome)
    .bind(fabricante)
    .bind(principio_ativo)
    .bind(data_validade)
    .bind(preco)
    .execute(db.pool())
    .await
    .expect("Insert medicamento should succeed");
}
