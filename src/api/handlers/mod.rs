mod clientes;
mod medicamentos;
mod messages;
mod system;

#[cfg(test)]
mod test_support;

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use clientes::*;
pub use medicamentos::*;
pub use system::*;

/// Body of every informational and failure response
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    #[schema(example = "Cliente cadastrado com sucesso.")]
    pub mensagem: String,
}

impl MessageResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Status code paired with a fixed message
pub type MessageError = (StatusCode, Json<MessageResponse>);

fn message(status: StatusCode, mensagem: &str) -> MessageError {
    (status, Json(MessageResponse::new(mensagem)))
}
