//! catalog-yearbook - read-only course listings over year documents
//!
//! Startup: tracing, configuration, store, optional seed import, listener.
//! A store that cannot be opened is fatal and the listener never starts.

use anyhow::Result;
use catalog_common::config::{ConfigOverrides, ServiceConfig, ServiceDefaults};
use catalog_common::db::{init_database, YearStore};
use catalog_common::seed::import_year_documents;
use catalog_yearbook::{build_router, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

const DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "yearbook",
    port: 3010,
    route_prefix: "/courses",
};

/// Read-only course listings flattened from per-year curriculum documents
#[derive(Debug, Parser)]
#[command(name = "catalog-yearbook", version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "CATALOG_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "CATALOG_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "CATALOG_DATABASE")]
    database: Option<PathBuf>,

    /// Prefix for course routes, e.g. /courses or /api/courses
    #[arg(long, env = "CATALOG_ROUTE_PREFIX")]
    route_prefix: Option<String>,

    /// TOML config file
    #[arg(long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// JSON array of year documents to import before serving
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        "Starting course catalog yearbook service (catalog-yearbook) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(
        &DEFAULTS,
        ConfigOverrides {
            host: args.host,
            port: args.port,
            database: args.database,
            route_prefix: args.route_prefix,
            config_file: args.config,
        },
    )?;
    info!("Database path: {}", config.database_path.display());

    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Database Connected!");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let years = YearStore::new(pool);

    if let Some(seed) = &args.seed {
        if let Err(e) = import_year_documents(&years, seed).await {
            error!("Failed to import seed {}: {}", seed.display(), e);
            return Err(e.into());
        }
    }

    let app = build_router(AppState::new(years), &config.route_prefix);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on http://{}...", address);
    info!("Course routes under {}", config.route_prefix);

    axum::serve(listener, app).await?;

    Ok(())
}
