//! Router assembly.

mod common;
mod kurban;

pub use common::common_routes;
pub use kurban::kurban_routes;

use crate::handlers::route_not_found;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: kurban CRUD plus health/readiness, with request tracing and a body size cap.
/// Unmatched paths get the error envelope too.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(kurban_routes(state))
        .fallback(route_not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
