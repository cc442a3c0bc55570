//! Size routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/sizes",
            get(handler::size::list).post(handler::size::create),
        )
        .route(
            "/api/sizes/{id}",
            get(handler::size::get)
                .put(handler::size::update)
                .delete(handler::size::remove),
        )
}
