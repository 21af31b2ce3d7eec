use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sr_chaincode::{Chaincode, ContractMetadata, Response, TransactionKind};
use sr_state::WorldState;

use crate::error::{ServerError, ServerResult};

/// Body of a submit or evaluate request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metadata_handler<W: WorldState + 'static>(
    State(chaincode): State<Arc<Chaincode<W>>>,
) -> Json<ContractMetadata> {
    Json(chaincode.metadata())
}

pub async fn submit_handler<W: WorldState + 'static>(
    State(chaincode): State<Arc<Chaincode<W>>>,
    Json(request): Json<InvokeRequest>,
) -> ServerResult<(StatusCode, Json<Response>)> {
    invoke(chaincode, TransactionKind::Submit, request).await
}

pub async fn evaluate_handler<W: WorldState + 'static>(
    State(chaincode): State<Arc<Chaincode<W>>>,
    Json(request): Json<InvokeRequest>,
) -> ServerResult<(StatusCode, Json<Response>)> {
    invoke(chaincode, TransactionKind::Evaluate, request).await
}

async fn invoke<W: WorldState + 'static>(
    chaincode: Arc<Chaincode<W>>,
    kind: TransactionKind,
    request: InvokeRequest,
) -> ServerResult<(StatusCode, Json<Response>)> {
    // File-backed state does blocking I/O on commit.
    let response = tokio::task::spawn_blocking(move || match kind {
        TransactionKind::Submit => chaincode.submit(&request.function, &request.args),
        TransactionKind::Evaluate => chaincode.evaluate(&request.function, &request.args),
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))?;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(response)))
}
