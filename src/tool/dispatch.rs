// ABOUTME: Implements the Dispatcher - resolves an invocation request to one
// ABOUTME: handler call and normalizes every outcome into the result envelope.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{Registry, ToolResult};
use crate::error::ToolError;

/// Resolves (tool name, raw arguments) pairs against a registry and executes.
///
/// Every outcome comes back as a `ToolResult` - lookup misses, validation
/// failures, and handler faults included. Nothing escapes the dispatcher
/// as an error.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Invoke `name` with raw caller-supplied arguments.
    pub async fn invoke(&self, name: &str, arguments: Map<String, Value>) -> ToolResult {
        match self.try_invoke(name, arguments).await {
            Ok(result) => result,
            Err(err) => {
                warn!(tool = name, error = %err, "invocation failed");
                ToolResult::from(err)
            }
        }
    }

    async fn try_invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ToolResult, ToolError> {
        let tool = self.registry.get(name).await?;
        let args = tool.schema().resolve(&arguments)?;
        debug!(tool = name, "dispatching");
        tool.execute(args).await.map_err(ToolError::Handler)
    }
}
