use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use equipment_monitor::shared::core::clock::SystemClock;
use equipment_monitor::shell::config::Args;
use equipment_monitor::shell::http::router;
use equipment_monitor::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let state = AppState::new(args.store()?, Arc::new(SystemClock), args.baseline_policy());
    let app = router(state);

    let listener = TcpListener::bind(args.bind_addr).await?;
    tracing::info!("REST endpoints: http://{}/equipment", args.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", args.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl+C");
    }
}
