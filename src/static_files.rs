use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tokio::fs;
use tracing::{error, info, warn};

use crate::AppState;

pub async fn serve_index(State(state): State<AppState>) -> Response {
    info!(dir = %state.static_dir.display(), "serving index.html");
    index_response(&state.static_dir).await
}

/// Serve a file from the static root, falling back to `index.html` for any
/// path the client-side router owns.
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let request_path = uri.path();

    match resolve_asset(&state.static_dir, request_path).await {
        Some(file_path) => match fs::read(&file_path).await {
            Ok(content) => {
                info!(path = %file_path.display(), "serving static file");
                let content_type =
                    content_type_for(file_path.extension().and_then(|ext| ext.to_str()));
                ([(header::CONTENT_TYPE, content_type)], content).into_response()
            }
            Err(err) => {
                error!(path = %file_path.display(), %err, "failed to read static file");
                index_response(&state.static_dir).await
            }
        },
        None => {
            info!(path = request_path, "serving index.html for unknown path");
            index_response(&state.static_dir).await
        }
    }
}

async fn index_response(static_dir: &Path) -> Response {
    let index_path = static_dir.join("index.html");
    match fs::read(&index_path).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(err) => {
            error!(path = %index_path.display(), %err, "index.html is missing");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Resolve a request path to an existing regular file inside `static_dir`.
/// Anything that escapes the root or does not exist resolves to `None`.
async fn resolve_asset(static_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let clean = request_path.trim_start_matches('/').replace("..", "");
    let clean = clean.trim_matches('/');
    if clean.is_empty() {
        return None;
    }

    let root = fs::canonicalize(static_dir).await.ok()?;
    let candidate = fs::canonicalize(root.join(clean)).await.ok()?;

    if !candidate.starts_with(&root) {
        warn!(path = request_path, "path traversal attempt blocked");
        return None;
    }

    let metadata = fs::metadata(&candidate).await.ok()?;
    metadata.is_file().then_some(candidate)
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
