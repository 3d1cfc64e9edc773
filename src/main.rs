use sal_tracker::{load_data, router, AppState, Settings};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let settings = Settings::from_env();
    if let Some(parent) = settings.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let data = load_data(&settings.data_path).await;
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!(
        "monthly goal {} SALs, data at {}",
        settings.monthly_goal,
        settings.data_path.display()
    );

    let app = router(AppState::new(settings, data));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
