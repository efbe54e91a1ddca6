use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use formsignal_api::routes::{self, AppState};
use formsignal_common::Config;
use formsignal_session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        store: SessionStore::new(),
    });

    let app = routes::build_router(state);

    let addr = config.bind_addr();
    info!("FormSignal collector starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
