//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Every
//! operation issues exactly one parameterized statement.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Cliente, Medicamento},
};

/// Repository for Cliente operations.
pub trait ClienteRepository: Send + Sync {
    /// Get every client in store order.
    fn list_all(&self) -> impl Future<Output = DbResult<Vec<Cliente>>> + Send;

    /// Insert a client and return it with the store-assigned identifier.
    ///
    /// The name is stored uppercased.
    fn register(&self, cliente: &Cliente) -> impl Future<Output = DbResult<Cliente>> + Send;

    /// Find a client by national identification number.
    ///
    /// `Ok(None)` means no row matched; errors are reserved for statement failures.
    fn find_by_cpf(&self, cpf: &str) -> impl Future<Output = DbResult<Option<Cliente>>> + Send;
}

/// Repository for Medicamento operations.
pub trait MedicamentoRepository: Send + Sync {
    /// Get every medication in store order.
    fn list_all(&self) -> impl Future<Output = DbResult<Vec<Medicamento>>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Clientes<'a>: ClienteRepository
    where
        Self: 'a;
    type Medicamentos<'a>: MedicamentoRepository
    where
        Self: 'a;

    /// Round-trip a trivial statement; false when the store is unreachable.
    fn probe(&self) -> impl Future<Output = bool> + Send;

    /// Get the client repository.
    fn clientes(&self) -> Self::Clientes<'_>;

    /// Get the medication repository.
    fn medicamentos(&self) -> Self::Medicamentos<'_>;
}
