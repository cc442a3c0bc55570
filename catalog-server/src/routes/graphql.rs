//! GraphQL route
//!
//! Single `/graphql` endpoint. The bearer token, when present and valid,
//! decodes into the request context; missing or invalid tokens leave the
//! request anonymous rather than rejecting it at the transport layer.
//! A playground is served on GET in development only.

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::Router;
use axum::routing::get;
use http::HeaderMap;

use crate::core::ServerState;
use crate::utils::AppError;

pub fn router() -> Router<ServerState> {
    Router::new().route("/graphql", get(playground).post(graphql_handler))
}

async fn graphql_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    if let Some(user) = state.jwt_service.authenticate_bearer(auth_header) {
        request = request.data(user);
    }

    state.schema.execute(request).await.into()
}

async fn playground(State(state): State<ServerState>) -> Result<Html<String>, AppError> {
    if !state.config.is_development() {
        return Err(AppError::not_found("Not found".to_string()));
    }
    Ok(Html(playground_source(GraphQLPlaygroundConfig::new(
        "/graphql",
    ))))
}
