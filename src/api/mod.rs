//! HTTP surface of the pharmacy service.
//!
//! Handlers are generic over [`Database`] and receive it through [`AppState`],
//! so the binary decides which backend is injected.

mod handlers;
mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use handlers::{
    ClienteLookupResponse, ClienteResponse, CreateClienteRequest, HealthResponse,
    MedicamentoResponse, MessageResponse,
};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

const DEFAULT_PORT: u16 = 3333;

/// Errors that stop the API server.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Database is unreachable, not accepting connections")]
    #[diagnostic(
        code(farmacia::api::database_unreachable),
        help("Check DATABASE_URL and that the database is running.")
    )]
    DatabaseUnreachable,

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(farmacia::api::bind))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(farmacia::api::serve))]
    Serve(#[from] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log verbosity (0 = info, 1 = debug, 2+ = trace)
    pub verbosity: u8,
    /// Serve interactive API docs at /docs
    pub enable_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            verbosity: 0,
            enable_docs: true,
        }
    }
}

impl Config {
    /// Defaults overridden by `FARMACIA_HOST` and `FARMACIA_PORT`.
    ///
    /// Values that do not parse are ignored.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Some(host) = env::var("FARMACIA_HOST").ok().and_then(|h| h.parse().ok()) {
            config.host = host;
        }
        if let Some(port) = env::var("FARMACIA_PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_docs(mut self, enable_docs: bool) -> Self {
        self.enable_docs = enable_docs;
        self
    }
}

/// Default filter directive for a verbosity level; `RUST_LOG` takes precedence.
pub fn default_log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "farmacia=info,farmacia_api=info,tower_http=info",
        1 => "farmacia=debug,farmacia_api=debug,tower_http=debug",
        _ => "farmacia=trace,farmacia_api=trace,tower_http=trace,sqlx=debug",
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration.
///
/// The database is probed first; when it does not answer, the listener is
/// never bound.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    if !db.probe().await {
        error!("Could not connect to the database");
        return Err(ApiError::DatabaseUnreachable);
    }

    let state = AppState::new(db);
    let app = create_router(state, config.enable_docs).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("Servidor rodando em http://{}", addr);
    if config.enable_docs {
        info!("API docs at http://{}/docs", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
