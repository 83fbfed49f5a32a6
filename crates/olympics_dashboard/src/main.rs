use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::info;

use olympics_dashboard::middleware::LoggingSource;
use olympics_dashboard::{AppState, router};
use olympics_data::OlympicsSource;
use olympics_data::config::{Config, DatasetLocation};
use olympics_data::file_source::FileOlympicsSource;
use olympics_data::http_source::HttpOlympicsSource;
use olympics_data::snapshot::CountryStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from `TELESPORT_LOG_LEVEL` (fallback `RUST_LOG`, default `info`).
    let log_env = std::env::var("TELESPORT_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "telesport dashboard: log filter");

    let builder = PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "missing dataset configuration; aborting startup");
            std::process::exit(1);
        }
    };

    let source: Arc<dyn OlympicsSource> = match cfg.dataset {
        DatasetLocation::Url(url) => Arc::new(LoggingSource::new(HttpOlympicsSource::new(url))),
        DatasetLocation::File(path) => Arc::new(LoggingSource::new(FileOlympicsSource::new(path))),
    };

    // One-shot load for the session; views answer 503 until it lands.
    let store = CountryStore::new();
    {
        let store = store.clone();
        let source = source.clone();
        tokio::spawn(async move {
            if let Err(e) = store.load_from(source.as_ref()).await {
                tracing::error!(error = %e, "initial dataset load failed");
            }
        });
    }
    {
        let mut feed = store.subscribe();
        tokio::spawn(async move {
            if let Some(loaded) = feed.recv().await {
                tracing::info!(countries = loaded.countries.len(), "dashboard ready");
            }
        });
    }

    let app = router(AppState::new(store, handle));

    let addr: SocketAddr = std::env::var("ADDRESS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    info!(%addr, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install ctrl+c handler");
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
