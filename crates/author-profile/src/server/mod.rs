//! HTTP server exposing the rankings as JSON.

pub mod routes;

use std::net::SocketAddr;

use crate::service::ProfileService;

/// HTTP front end for the profile service.
pub struct ProfileServer {
    service: ProfileService,
}

impl ProfileServer {
    /// Create a new server.
    #[must_use]
    pub const fn new(service: ProfileService) -> Self {
        Self { service }
    }

    /// Serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.service);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Service backing this server.
    #[must_use]
    pub const fn service(&self) -> &ProfileService {
        &self.service
    }
}

impl std::fmt::Debug for ProfileServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileServer").field("service", &self.service).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
