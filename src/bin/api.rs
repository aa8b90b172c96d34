//! Farmácia API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use farmacia::api::{self, ApiError, Config};
use farmacia::db::{DatabaseConfig, DbError, SqliteDatabase};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(farmacia::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(farmacia::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "farmacia-api")]
#[command(author, version, about = "Farmácia API server", long_about = None)]
struct Cli {
    /// Host address to bind to (default: FARMACIA_HOST env or 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (default: FARMACIA_PORT env or 3333)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database URL (default: DATABASE_URL env or sqlite://farmacia.db)
    #[arg(long)]
    database_url: Option<String>,

    /// Maximum pooled connections (default: DATABASE_MAX_CONNECTIONS env or 10)
    #[arg(long)]
    max_connections: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not serve API docs at /docs
    #[arg(long)]
    no_docs: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // A missing .env file is fine; the environment may already be set
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    api::init_tracing(cli.verbose);

    serve(cli)
        .await
        .inspect_err(|e| error!(error = %e, "Erro ao iniciar o servidor"))?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::new()
        .with_verbosity(cli.verbose)
        .with_docs(!cli.no_docs);
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let mut db_config = DatabaseConfig::from_env()?;
    if let Some(url) = cli.database_url {
        db_config = db_config.with_url(url);
    }
    if let Some(max) = cli.max_connections {
        db_config = db_config.with_max_connections(max);
    }

    info!(url = %db_config.url, "Opening database");
    let db = SqliteDatabase::connect(&db_config).await?;

    // Probes the database before binding the listener
    api::run(config, db).await?;
    Ok(())
}
