mod cli;
mod console;

use std::sync::Arc;

use agri_advisor::{
    AdvisorClient, DashboardFetcher, DashboardSource, HttpAdvisorClient, HttpConfig,
    QueryDispatcher, SessionStore,
};
use agri_common::{AgriError, ConfigError, SessionId};
use agri_config::AgriConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use console::Console;

fn init_logging(args: &cli::Args, config: Option<&AgriConfig>) {
    let directive = args
        .log_level
        .clone()
        .or_else(|| config.map(|c| c.logging.level.as_directive().to_string()))
        .unwrap_or_else(|| "info".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();
}

fn load_config(args: &cli::Args) -> Result<AgriConfig, ConfigError> {
    match &args.config {
        Some(path) => agri_config::load_config_from(path),
        None => agri_config::load_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Logging depends on the config level, so report load errors after init.
    let loaded = load_config(&args);
    init_logging(&args, loaded.as_ref().ok());

    tracing::info!("Agri-Cult v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = AgriConfig::default();
        agri_config::env::apply_env_overrides(&mut config);
        config
    });
    if let Err(e) = run(config, &args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Apply command-line overrides and re-check the result, so a flag gets the
/// same validation as file and environment values.
fn apply_cli_overrides(config: &mut AgriConfig, args: &cli::Args) -> Result<(), ConfigError> {
    if let Some(url) = &args.base_url {
        config.server.base_url = url.trim().trim_end_matches('/').to_string();
        agri_config::validation::validate(config)?;
    }
    Ok(())
}

async fn run(mut config: AgriConfig, args: &cli::Args) -> agri_common::Result<()> {
    apply_cli_overrides(&mut config, args)?;
    tracing::info!("Knowledge service: {}", config.server.base_url);

    let http_config = HttpConfig::new(&config.server.base_url)
        .with_connect_timeout(config.server.connect_timeout())
        .with_request_timeout(config.server.request_timeout());
    let client = HttpAdvisorClient::new(http_config)
        .map(Arc::new)
        .map_err(|e| AgriError::Network(e.to_string()))?;

    match client.health().await {
        Ok(health) if health.is_healthy() => {
            tracing::info!("Connected to {} v{}", health.project, health.version)
        }
        Ok(health) => tracing::warn!("Knowledge service reports status {}", health.status),
        Err(e) => tracing::warn!("Knowledge service unreachable: {e}"),
    }

    let session_id = config
        .session
        .session_id
        .clone()
        .map(SessionId::from_configured)
        .unwrap_or_default();
    tracing::info!(session = %session_id, "Session started");
    let store = SessionStore::new(session_id, config.session.welcome_message.clone());
    let dispatcher = QueryDispatcher::new(client.clone(), store);

    let dashboard = (config.dashboard.enabled && !args.no_dashboard).then(|| {
        let source: Arc<dyn DashboardSource> = client;
        let fetcher = DashboardFetcher::new(source).with_news(config.dashboard.include_news);
        fetcher.spawn_refresh();
        fetcher
    });

    Console::new(dispatcher, dashboard).run().await?;
    Ok(())
}
