use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::api::{create_router, AppState};
use pulse::classifier::ClassifierProvider;
use pulse::config::Config;
use pulse::session::SessionReaper;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Mood-aware task planning service")]
struct Args {
    /// Override PULSE_HOST
    #[arg(long)]
    host: Option<String>,

    /// Override PULSE_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(
        "Initializing emotion classifier: {}...",
        config.classifier.model
    );
    let classifier = ClassifierProvider::new(&config.classifier);
    if !classifier.is_available() {
        tracing::warn!("Emotion classifier unavailable - image analysis will return the fallback result");
    }

    let state = AppState::new(config.clone(), classifier);

    let cancel_token = CancellationToken::new();

    tracing::info!(
        "Starting session reaper... (idle_timeout={}s)",
        config.session.idle_timeout_secs
    );
    let reaper = SessionReaper::new(
        state.sessions.clone(),
        config.session.idle_timeout_secs,
        config.session.sweep_interval_secs,
    );
    let token = cancel_token.child_token();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Session reaper shutting down...");
                    break;
                }
                _ = tokio::time::sleep(tokio::time::Duration::from_secs(reaper.interval_secs())) => {
                    reaper.run_once().await;
                }
            }
        }
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Pulse starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI document: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
