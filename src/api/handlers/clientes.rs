//! Client handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use super::{MessageError, MessageResponse, message, messages};
use crate::api::AppState;
use crate::db::{Cliente, ClienteRepository, Database};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Client response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ClienteResponse {
    /// Store-assigned identifier
    #[serde(rename = "idCliente")]
    #[schema(example = 1)]
    pub id_cliente: i64,
    /// Full name, uppercased on registration
    #[schema(example = "ANA SILVA")]
    pub nome: String,
    /// National identification number
    #[schema(example = "12345678900")]
    pub cpf: String,
    #[schema(example = "2000-01-01")]
    pub data_nascimento: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "11999990000")]
    pub telefone: String,
}

impl From<Cliente> for ClienteResponse {
    fn from(c: Cliente) -> Self {
        Self {
            id_cliente: c.id(),
            nome: c.nome().to_string(),
            cpf: c.cpf().to_string(),
            data_nascimento: c.data_nascimento().to_string(),
            email: c.email().to_string(),
            telefone: c.telefone().to_string(),
        }
    }
}

/// Create client request DTO
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteRequest {
    #[schema(example = "ana silva")]
    pub nome: String,
    #[schema(example = "12345678900")]
    pub cpf: String,
    #[schema(example = "2000-01-01")]
    pub data_nascimento: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "11999990000")]
    pub telefone: String,
}

/// Lookup result: the client, or a message when no row matched
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ClienteLookupResponse {
    Found(ClienteResponse),
    NotFound(MessageResponse),
}

// =============================================================================
// Handlers
// =============================================================================

/// List all clients
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "clientes",
    responses(
        (status = 200, description = "Every client, in store order", body = Vec<ClienteResponse>),
        (status = 500, description = "Query failed", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_clientes<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ClienteResponse>>, MessageError> {
    let clientes = state
        .db()
        .clientes()
        .list_all()
        .await
        .map_err(|_| {
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::LISTA_CLIENTES_FALHOU,
            )
        })?;

    Ok(Json(clientes.into_iter().map(ClienteResponse::from).collect()))
}

/// Register a client
///
/// The payload is passed through without field validation; the name is
/// stored uppercased. Store rejections (duplicate CPF included) answer 400.
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "clientes",
    request_body = CreateClienteRequest,
    responses(
        (status = 201, description = "Client registered", body = MessageResponse),
        (status = 400, description = "Client could not be registered", body = MessageResponse),
        (status = 500, description = "Database unavailable", body = MessageResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_cliente<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateClienteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), MessageError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected cliente payload");
        message(StatusCode::BAD_REQUEST, messages::CADASTRO_FALHOU)
    })?;

    let cliente = Cliente::new(
        req.nome,
        req.cpf,
        req.data_nascimento,
        req.email,
        req.telefone,
    );

    match state.db().clientes().register(&cliente).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new(messages::CLIENTE_CADASTRADO)),
        )),
        Err(e) if e.is_connection() => Err(message(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::INSERCAO_FALHOU,
        )),
        Err(_) => Err(message(StatusCode::BAD_REQUEST, messages::CADASTRO_FALHOU)),
    }
}

/// Get a client by CPF
///
/// A CPF with no matching client is not an error: it answers 200 with a message.
#[utoipa::path(
    get,
    path = "/api/clientes/{cpf}",
    tag = "clientes",
    params(
        ("cpf" = String, Path, description = "National identification number")
    ),
    responses(
        (status = 200, description = "Client, or a not-found message", body = ClienteLookupResponse),
        (status = 400, description = "Blank CPF", body = MessageResponse),
        (status = 500, description = "Database unavailable", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_cliente<D: Database>(
    State(state): State<AppState<D>>,
    Path(cpf): Path<String>,
) -> Result<Json<ClienteLookupResponse>, MessageError> {
    if cpf.trim().is_empty() {
        return Err(message(StatusCode::BAD_REQUEST, messages::CPF_INVALIDO));
    }

    let not_found = || {
        Json(ClienteLookupResponse::NotFound(MessageResponse::new(
            messages::CLIENTE_NAO_ENCONTRADO,
        )))
    };

    match state.db().clientes().find_by_cpf(&cpf).await {
        Ok(Some(cliente)) => Ok(Json(ClienteLookupResponse::Found(cliente.into()))),
        Ok(None) => Ok(not_found()),
        Err(e) if e.is_connection() => Err(message(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::RECUPERACAO_FALHOU,
        )),
        Err(e) => {
            warn!(error = %e, "Lookup failed, answering as not found");
            Ok(not_found())
        }
    }
}
