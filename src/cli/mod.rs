use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::database::DatabaseManager;

#[derive(Parser)]
#[command(name = "comporta")]
#[command(about = "Comporta.io API - people, events and routine tracking")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "SQLite database URL (overrides DATABASE_URL)")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP API (default)")]
    Serve {
        #[arg(long, help = "Interface to bind")]
        host: Option<String>,
        #[arg(long, help = "Port to listen on")]
        port: Option<u16>,
    },

    #[command(about = "Apply pending database migrations and exit")]
    Migrate,
}

impl Cli {
    /// Merge command line overrides into the environment-derived config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(Commands::Serve { host, port }) = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = crate::config::config().clone();
    cli.apply(&mut config);
    init_tracing(&config);

    if crate::is_development!() {
        tracing::debug!("Loaded configuration: {:?}", config);
    }

    match cli.command {
        Some(Commands::Migrate) => {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to open database")?;
            pool.close().await;
            tracing::info!("Database at {} is up to date", config.database.url);
            Ok(())
        }
        Some(Commands::Serve { .. }) | None => serve(config).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Comporta API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;

    let router = app(AppState::new(pool.clone()), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Comporta API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::parse_from(["comporta", "--database-url", "sqlite::memory:", "serve", "--port", "8088"]);
        let mut config = AppConfig::development();
        cli.apply(&mut config);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["comporta"]);
        assert!(cli.command.is_none());
    }
}
