use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::{Error, Result};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    /// `0` binds an ephemeral port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and start serving in the background.
pub async fn start(config: ServerConfig) -> Result<ServerHandle> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| Error::Bind {
            addr: format!("{}:{}", config.host, config.port),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        host = %config.host,
        port = local_addr.port(),
        "listening on http://localhost:{}",
        local_addr.port()
    );

    let task = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, build_router()).await {
            tracing::error!(error = %err, "server stopped");
        }
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        local_addr,
        task,
    })
}

/// Handle returned by `start()`; the server runs until it is aborted.
#[derive(Debug)]
pub struct ServerHandle {
    pub port: u16,
    pub local_addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    /// Serve until ctrl-c, then stop the server task
    pub async fn run_until_ctrl_c(mut self) -> Result<()> {
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            result = self.wait() => return result,
        }

        tracing::info!("shutting down");
        self.abort();
        Ok(())
    }

    /// Wait for the server task to finish
    pub async fn wait(&mut self) -> Result<()> {
        match (&mut self.task).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(Error::Task(err.to_string())),
        }
    }
}
