use std::net::SocketAddr;
use topmatch::{router, AppState, Config, SlateStore};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let pager = config.pager();
    info!(
        "serving slates from {} up to {}",
        config.data_dir.display(),
        pager.current_key()
    );

    let state = AppState::new(
        SlateStore::new(config.data_dir.clone()),
        config.color_scale(),
        config.logo_dir.clone(),
        pager,
    );
    state.reload().await;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
