//! SQLite ClienteRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{error, info};

use super::helpers::map_sqlx_error;
use crate::db::{Cliente, ClienteRepository, DbError, DbResult};

const SELECT_ALL: &str =
    "SELECT id_cliente, nome, cpf, data_nascimento, email, telefone FROM clientes";

const SELECT_BY_CPF: &str =
    "SELECT id_cliente, nome, cpf, data_nascimento, email, telefone FROM clientes WHERE cpf = ?";

/// SQLx-backed client repository.
pub struct SqliteClienteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn cliente_from_row(row: &SqliteRow) -> Result<Cliente, sqlx::Error> {
    let cliente = Cliente::new(
        row.try_get::<String, _>("nome")?,
        row.try_get::<String, _>("cpf")?,
        row.try_get::<String, _>("data_nascimento")?,
        row.try_get::<String, _>("email")?,
        row.try_get::<String, _>("telefone")?,
    );
    Ok(cliente.with_id(row.try_get("id_cliente")?))
}

impl ClienteRepository for SqliteClienteRepository<'_> {
    async fn list_all(&self) -> DbResult<Vec<Cliente>> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)
            .inspect_err(|e| error!(error = %e, "Failed to list clientes"))?;

        rows.iter()
            .map(cliente_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
            .inspect_err(|e| error!(error = %e, "Failed to map cliente rows"))
    }

    async fn register(&self, cliente: &Cliente) -> DbResult<Cliente> {
        let nome = cliente.nome().to_uppercase();

        let row = sqlx::query(
            "INSERT INTO clientes (nome, cpf, data_nascimento, email, telefone) \
             VALUES (?, ?, ?, ?, ?) RETURNING id_cliente",
        )
        .bind(&nome)
        .bind(cliente.cpf())
        .bind(cliente.data_nascimento())
        .bind(cliente.email())
        .bind(cliente.telefone())
        .fetch_optional(self.pool)
        .await
        .map_err(map_sqlx_error)
        .inspect_err(|e| error!(error = %e, cpf = cliente.cpf(), "Failed to insert cliente"))?;

        let row = row.ok_or_else(|| {
            error!(cpf = cliente.cpf(), "Insert returned no identifier");
            DbError::Database {
                message: "insert into clientes returned no row".to_string(),
            }
        })?;

        let id: i64 = row.try_get("id_cliente").map_err(map_sqlx_error)?;
        info!(id_cliente = id, "Cliente cadastrado com sucesso");

        let mut registered = cliente.clone().with_id(id);
        registered.set_nome(nome);
        Ok(registered)
    }

    async fn find_by_cpf(&self, cpf: &str) -> DbResult<Option<Cliente>> {
        let row = sqlx::query(SELECT_BY_CPF)
            .bind(cpf)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)
            .inspect_err(|e| error!(error = %e, cpf, "Failed to look up cliente"))?;

        row.as_ref()
            .map(cliente_from_row)
            .transpose()
            .map_err(map_sqlx_error)
    }
}
