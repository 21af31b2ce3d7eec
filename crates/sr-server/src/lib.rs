//! HTTP shim for the student records chaincode.
//!
//! Exposes a [`Chaincode`](sr_chaincode::Chaincode) over REST so clients can
//! submit and evaluate transactions without a peer:
//!
//! - `GET  /v1/health`
//! - `GET  /v1/metadata`
//! - `POST /v1/transactions/submit`
//! - `POST /v1/transactions/evaluate`

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::InvokeRequest;
pub use router::build_router;
pub use server::ChaincodeServer;
