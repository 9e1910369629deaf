use chat_gateway::{build_app, run_server, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let state = AppState::from_config(&config);

    info!(
        port = config.port,
        static_dir = %config.static_dir.display(),
        "starting chat gateway"
    );

    run_server(build_app(state), config.port).await;
}
