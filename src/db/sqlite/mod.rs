//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod cliente;
mod connection;
mod helpers;
mod medicamento;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod cliente_test;
#[cfg(test)]
mod connection_test;

pub use cliente::SqliteClienteRepository;
pub use connection::SqliteDatabase;
pub use medicamento::SqliteMedicamentoRepository;
