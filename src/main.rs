// ABOUTME: toolgate server binary - binds the HTTP boundary on a local port
// ABOUTME: and serves the built-in tool definitions.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolgate::server::Server;
use toolgate::tool::{Registry, ToolSource};
use toolgate::tools::BuiltinSource;

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolgate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("TOOLGATE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let source: Arc<dyn ToolSource> = Arc::new(BuiltinSource);
    let registry = Registry::from_source(source.as_ref()).await?;
    tracing::info!(tools = ?registry.names().await, "loaded built-in tools");

    let server = Server::bind(addr, registry, source).await?;
    tracing::info!(addr = %server.addr(), "serving, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    Ok(())
}
