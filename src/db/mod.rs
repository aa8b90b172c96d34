//! Data access layer.
//!
//! Trait-based abstractions over the relational store so that handlers stay
//! agnostic of the backend that actually runs the statements.
//!
//! # Architecture
//!
//! - `config`: Pool configuration (URL, sizing)
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Cliente, Medicamento)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod config;
mod error;
mod models;
mod repository;
pub mod sqlite;


pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
