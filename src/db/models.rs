//! Domain models for the pharmacy database.
//!
//! These models are storage-agnostic and never perform I/O themselves;
//! repositories materialize them from rows, one per query.

// =============================================================================
// Cliente
// =============================================================================

/// A registered client.
///
/// The identifier is assigned by the store. A value of `0` means the client
/// has not been persisted yet, and there is no public way to change it once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    id: i64,
    nome: String,
    cpf: String,
    data_nascimento: String,
    email: String,
    telefone: String,
}

impl Cliente {
    /// Build an unpersisted client.
    pub fn new(
        nome: impl Into<String>,
        cpf: impl Into<String>,
        data_nascimento: impl Into<String>,
        email: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            nome: nome.into(),
            cpf: cpf.into(),
            data_nascimento: data_nascimento.into(),
            email: email.into(),
            telefone: telefone.into(),
        }
    }

    /// Attach the store-assigned identifier. Only repositories call this.
    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) {
        self.nome = nome.into();
    }

    /// National identification number, the natural key used for lookups.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn set_cpf(&mut self, cpf: impl Into<String>) {
        self.cpf = cpf.into();
    }

    pub fn data_nascimento(&self) -> &str {
        &self.data_nascimento
    }

    pub fn set_data_nascimento(&mut self, data_nascimento: impl Into<String>) {
        self.data_nascimento = data_nascimento.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn telefone(&self) -> &str {
        &self.telefone
    }

    pub fn set_telefone(&mut self, telefone: impl Into<String>) {
        self.telefone = telefone.into();
    }
}

// =============================================================================
// Medicamento
// =============================================================================

/// A medication as stored in the `medicamentos` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Medicamento {
    pub id: i64,
    pub nome: String,
    pub fabricante: String,
    pub principio_ativo: String,
    pub data_validade: String,
    pub preco: f64,
}
