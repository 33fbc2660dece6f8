use chat_server::build_router;
use chat_server::error::ServerError;
use chat_server::logger;
use chat_server::metrics_router;

use chat_db::MessageStore;
use chat_ws::{AppState, BroadcastHub, ConnectionConfig, HubConfig, Metrics, ShutdownCoordinator};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env file: {e}");
    }

    // Load and validate configuration
    let config = chat_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = chat_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting chat-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();
    let hub = BroadcastHub::new(
        MessageStore::new(),
        HubConfig::from(&config.broadcast),
        metrics.clone(),
    );

    let app_state = AppState {
        hub: hub.clone(),
        metrics,
        shutdown: shutdown.clone(),
        config: ConnectionConfig {
            send_buffer_size: config.websocket.send_buffer_size,
        },
        sse_keep_alive: Duration::from_secs(config.broadcast.sse_keep_alive_secs),
    };

    let app = build_router(app_state).merge(metrics_router(prometheus));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port 0 was requested
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let hub_for_shutdown = hub.clone();
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            // Ends every open SSE stream once its backlog is flushed
            hub_for_shutdown.close_all();
            info!("Waiting for open connections to finish");
        })
        .await?;

    let stats = hub_stats_summary(&hub);
    if stats.overflowed > 0 {
        warn!(
            "{} of {} publishes overflowed the live buffer during this run",
            stats.overflowed, stats.published
        );
    }
    info!("Graceful shutdown complete");

    Ok(())
}

fn hub_stats_summary(hub: &BroadcastHub) -> chat_ws::HubStats {
    let stats = hub.stats();
    info!(
        "Hub totals: {} published, {} delivered live, {} evicted, {} messages stored",
        stats.published,
        stats.delivered,
        stats.evicted,
        hub.store().len()
    );
    stats
}
