//! SQLite MedicamentoRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::error;

use super::helpers::map_sqlx_error;
use crate::db::{DbResult, Medicamento, MedicamentoRepository};

/// SQLx-backed medication repository.
pub struct SqliteMedicamentoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl MedicamentoRepository for SqliteMedicamentoRepository<'_> {
    async fn list_all(&self) -> DbResult<Vec<Medicamento>> {
        let rows = sqlx::query(
            "SELECT id_medicamento, nome, fabricante, principio_ativo, data_validade, preco \
             FROM medicamentos",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_sqlx_error)
        .inspect_err(|e| error!(error = %e, "Failed to list medicamentos"))?;

        rows.iter()
            .map(|row| -> Result<Medicamento, sqlx::Error> {
                Ok(Medicamento {
                    id: row.try_get("id_medicamento")?,
                    nome: row.try_get("nome")?,
                    fabricante: row.try_get("fabricante")?,
                    principio_ativo: row.try_get("principio_ativo")?,
                    data_validade: row.try_get("data_validade")?,
                    preco: row.try_get("preco")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }
}
