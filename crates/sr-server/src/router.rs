use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sr_chaincode::Chaincode;
use sr_state::WorldState;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with all chaincode endpoints.
pub fn build_router<W: WorldState + 'static>(chaincode: Arc<Chaincode<W>>) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/metadata", get(handler::metadata_handler::<W>))
        .route("/v1/transactions/submit", post(handler::submit_handler::<W>))
        .route("/v1/transactions/evaluate", post(handler::evaluate_handler::<W>))
        .layer(TraceLayer::new_for_http())
        .with_state(chaincode)
}
