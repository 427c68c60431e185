// ABOUTME: Route handlers for the service boundary - server info, tool
// ABOUTME: listing, reload, and invocation.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use super::AppState;
use crate::tool::ToolResult;

/// Request body for `POST /execute`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteRequest {
    pub tool_name: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// GET / - server identity and tool names.
pub(crate) async fn server_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": "Toolgate Server",
        "description": "Reloadable tool registry with schema-validated dispatch",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.registry.names().await,
    }))
}

/// GET /tools - descriptors for every registered tool. Handler references
/// are never exposed.
pub(crate) async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut tools = Map::new();
    for descriptor in state.registry.list().await {
        tools.insert(descriptor.name.clone(), descriptor.to_json());
    }
    Json(json!({ "tools": tools }))
}

/// POST /reload_tools - rebuild the snapshot from the configured source.
/// On failure the previous snapshot stays active.
pub(crate) async fn reload_tools(State(state): State<Arc<AppState>>) -> Json<Value> {
    match state.registry.reload(state.source.as_ref()).await {
        Ok(count) => {
            info!(count, "tool registry reloaded");
            Json(json!({
                "success": true,
                "message": format!("Reloaded {count} tools."),
                "tools": state.registry.names().await,
            }))
        }
        Err(err) => {
            warn!(error = %err, "reload failed, keeping previous snapshot");
            Json(json!({
                "success": false,
                "message": err.to_string(),
            }))
        }
    }
}

/// POST /execute - invoke one tool. Always answers 200 with the result
/// envelope; failures are carried in `success`/`errorKind`, not in the
/// HTTP status.
pub(crate) async fn execute_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExecuteRequest>,
) -> Json<ToolResult> {
    Json(
        state
            .dispatcher
            .invoke(&request.tool_name, request.parameters)
            .await,
    )
}
