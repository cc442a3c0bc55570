//! Upload route

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;

use crate::core::ServerState;
use crate::handler;

/// Multipart body limit: the 5MB file plus form overhead
const UPLOAD_BODY_LIMIT: usize = 6 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/upload", post(handler::upload::upload))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
