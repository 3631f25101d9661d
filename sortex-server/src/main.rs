use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sortex_core::{FleetUnitOfWork, MIGRATOR, database, seed};
use sortex_server::config::Config;
use sortex_server::{AppState, create_app};

/// Fleet mission tracker: assigns a driver, a vehicle, and an engineer crew
/// to each mission and answers availability queries for all three rosters.
#[derive(Parser, Debug)]
#[command(name = "sortex-server", version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "SORTEX_PORT")]
    port: Option<u16>,

    /// Host to bind
    #[arg(long, env = "SORTEX_HOST")]
    host: Option<String>,

    /// SQLite database file
    #[arg(long, env = "SORTEX_DB_PATH")]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.env_file_loaded {
        info!("loaded environment from .env");
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(path) = cli.db_path {
        config.database.path = path;
    }

    let pool = database::connect(&config.database.path)
        .await
        .context("failed to open the mission store")?;
    MIGRATOR
        .run(&pool)
        .await
        .context("failed to run database migrations")?;
    seed::seed_default_fleet(&pool)
        .await
        .context("failed to seed the fleet roster")?;

    let unit_of_work = Arc::new(FleetUnitOfWork::from_pool(pool));
    let state = AppState::new(unit_of_work, Arc::new(config.clone()));
    let app = create_app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
            .await
            .with_context(|| {
                format!(
                    "failed to bind {}:{}",
                    config.server.host, config.server.port
                )
            })?;
    info!(
        address = %listener.local_addr().context("failed to read listener address")?,
        "Sortex fleet tracker listening"
    );

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
