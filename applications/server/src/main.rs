/// OpenMusic Server - album and song catalog over HTTP
use clap::{Parser, Subcommand};
use openmusic_server::{api, config::ServerConfig, state::AppState};
use openmusic_storage::SqliteCatalog;
use std::{net::SocketAddr, path::Path, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "openmusic-server")]
#[command(about = "OpenMusic album and song catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openmusic_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(load_config(config.as_deref())?).await?;
        }
        Commands::Migrate { config } => {
            migrate(load_config(config.as_deref())?).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> anyhow::Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::load_from(Path::new(path))?,
        None => ServerConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting OpenMusic Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = openmusic_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    openmusic_storage::run_migrations(&pool).await?;
    let catalog = Arc::new(SqliteCatalog::new(pool));
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(catalog);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config: ServerConfig) -> anyhow::Result<()> {
    let pool = openmusic_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    openmusic_storage::run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}
