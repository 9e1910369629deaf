mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{static_files, AppState};

pub use handlers::chat;
pub use models::{ChatRequest, ErrorResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get-chat-bot-data", post(chat))
        .route("/", get(static_files::serve_index))
        .route("/{*path}", get(static_files::serve_asset))
        .with_state(state)
}
