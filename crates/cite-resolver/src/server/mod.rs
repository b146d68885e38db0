//! HTTP front end for the citation resolver.
//!
//! Serves the JSON endpoint the note editor calls while typing a citation.

pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::resolver::CitationResolver;

pub use transport::create_router;

/// HTTP server wrapping a shared [`CitationResolver`].
#[derive(Debug, Clone)]
pub struct CitationServer {
    resolver: Arc<CitationResolver>,
}

impl CitationServer {
    /// Create a new server.
    #[must_use]
    pub fn new(resolver: CitationResolver) -> Self {
        Self { resolver: Arc::new(resolver) }
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error if the port cannot be bound or the server fails.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = create_router(self.resolver);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(err) => {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C, shutting down");
        }
    }
}
