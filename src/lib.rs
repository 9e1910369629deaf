use std::path::PathBuf;

use axum::Router;
use tracing::info;

pub mod api;
pub mod config;
pub mod databricks;
pub mod static_files;

pub use config::AppConfig;
pub use databricks::{DatabricksClient, ForwardError};

#[derive(Clone)]
pub struct AppState {
    pub forwarder: DatabricksClient,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            forwarder: DatabricksClient::new(
                config.databricks_url.clone(),
                config.databricks_token.clone(),
                config.timeout_ms,
            ),
            static_dir: config.static_dir.clone(),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    info!(%port, "listening");

    axum::serve(listener, app).await.expect("server failed");
}
