//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use super::{AppState, Config};

/// HTTP Server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let app = crate::api::router(self.state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Label Station listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
