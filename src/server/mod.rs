// ABOUTME: HTTP service boundary - exposes list, reload, and invoke over a
// ABOUTME: local axum server with permissive CORS.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::error::ServerError;
use crate::tool::{Dispatcher, Registry, ToolSource};

/// Shared state for route handlers.
pub(crate) struct AppState {
    pub(crate) registry: Registry,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) source: Arc<dyn ToolSource>,
}

/// A running toolgate server.
///
/// Serving happens on a spawned task; dropping the server signals it to
/// shut down gracefully.
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    /// Bind `addr` and start serving `registry`, reloading from `source`.
    pub async fn bind(
        addr: SocketAddr,
        registry: Registry,
        source: Arc<dyn ToolSource>,
    ) -> Result<Self, ServerError> {
        let dispatcher = Dispatcher::new(registry.clone());
        let state = Arc::new(AppState {
            registry,
            dispatcher,
            source,
        });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = Router::new()
            .route("/", get(routes::server_info))
            .route("/tools", get(routes::list_tools))
            .route("/reload_tools", post(routes::reload_tools))
            .route("/execute", post(routes::execute_tool))
            .with_state(state)
            .layer(cors);
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        info!(%addr, "toolgate server listening");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    /// The address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal the serve task to stop.
    pub fn shutdown(&mut self) {
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.shutdown();
    }
}
