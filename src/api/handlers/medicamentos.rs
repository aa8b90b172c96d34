//! Medication handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{MessageError, MessageResponse, message, messages};
use crate::api::AppState;
use crate::db::{Database, Medicamento, MedicamentoRepository};

/// Medication response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MedicamentoResponse {
    #[serde(rename = "idMedicamento")]
    #[schema(example = 1)]
    pub id_medicamento: i64,
    #[schema(example = "Dipirona")]
    pub nome: String,
    #[schema(example = "EMS")]
    pub fabricante: String,
    #[schema(example = "Dipirona Sódica")]
    pub principio_ativo: String,
    #[schema(example = "2027-06-30")]
    pub data_validade: String,
    #[schema(example = 12.5)]
    pub preco: f64,
}

impl From<Medicamento> for MedicamentoResponse {
    fn from(m: Medicamento) -> Self {
        Self {
            id_medicamento: m.id,
            nome: m.nome,
            fabricante: m.fabricante,
            principio_ativo: m.principio_ativo,
            data_validade: m.data_validade,
            preco: m.preco,
        }
    }
}

/// List all medications
#[utoipa::path(
    get,
    path = "/api/medicamentos",
    tag = "medicamentos",
    responses(
        (status = 200, description = "Every medication, in store order", body = Vec<MedicamentoResponse>),
        (status = 500, description = "Query failed", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_medicamentos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<MedicamentoResponse>>, MessageError> {
    let medicamentos = state.db().medicamentos().list_all().await.map_err(|_| {
        message(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::LISTA_MEDICAMENTOS_FALHOU,
        )
    })?;

    Ok(Json(
        medicamentos
            .into_iter()
            .map(MedicamentoResponse::from)
            .collect(),
    ))
}
