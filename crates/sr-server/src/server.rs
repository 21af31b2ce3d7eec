use std::sync::Arc;

use sr_chaincode::Chaincode;
use sr_state::WorldState;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Serves one chaincode over HTTP.
pub struct ChaincodeServer<W: WorldState + 'static> {
    config: ServerConfig,
    chaincode: Arc<Chaincode<W>>,
}

impl<W: WorldState + 'static> ChaincodeServer<W> {
    pub fn new(config: ServerConfig, chaincode: Chaincode<W>) -> Self {
        Self {
            config,
            chaincode: Arc::new(chaincode),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.chaincode))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            contract = self.chaincode.contract().name(),
            "chaincode server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down chaincode server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_state::InMemoryWorldState;

    #[test]
    fn server_construction() {
        let server = ChaincodeServer::new(
            ServerConfig::default(),
            Chaincode::new(InMemoryWorldState::new()),
        );
        assert_eq!(server.config().bind_addr, "127.0.0.1:9999".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = ChaincodeServer::new(
            ServerConfig::default(),
            Chaincode::new(InMemoryWorldState::new()),
        );
        let _router = server.router();
    }
}
