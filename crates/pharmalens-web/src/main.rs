//! Pharmalens Web Server
//!
//! Run with: cargo run -p pharmalens-web

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pharmalens_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    info!(workbook = %config.workbook.path, "Starting Pharmalens...");

    // Reading the workbook is part of startup: a missing file or a
    // mis-shaped detail sheet aborts here, before we ever bind a port.
    let state = pharmalens_web::state::AppState::new(config.clone())?;
    let app = pharmalens_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
