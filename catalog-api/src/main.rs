//! catalog-api - flat course collection service
//!
//! Startup: tracing, configuration, store, optional seed import, listener.
//! A store that cannot be opened is fatal and the listener never starts.

use anyhow::Result;
use catalog_api::{build_router, AppState};
use catalog_common::config::{ConfigOverrides, ServiceConfig, ServiceDefaults};
use catalog_common::db::{init_database, CourseStore};
use catalog_common::seed::import_courses;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

const DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "api",
    port: 3000,
    route_prefix: "/api/courses",
};

/// Course search and CRUD over the flat course collection
#[derive(Debug, Parser)]
#[command(name = "catalog-api", version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "CATALOG_HOST")]
    host: Option<String>,

    /// Port to listen on (falls back to PORT)
    #[arg(long, env = "CATALOG_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "CATALOG_DATABASE")]
    database: Option<PathBuf>,

    /// Prefix for course routes
    #[arg(long, env = "CATALOG_ROUTE_PREFIX")]
    route_prefix: Option<String>,

    /// TOML config file
    #[arg(long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// JSON array of course records to import before serving
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
        "Starting course catalog API (catalog-api) v{}",
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
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Could not connect to database: {}", e);
            return Err(e.into());
        }
    };

    let courses = CourseStore::new(pool);

    if let Some(seed) = &args.seed {
        if let Err(e) = import_courses(&courses, seed).await {
            error!("Failed to import seed {}: {}", seed.display(), e);
            return Err(e.into());
        }
    }

    let app = build_router(AppState::new(courses), &config.route_prefix);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on http://{}...", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
