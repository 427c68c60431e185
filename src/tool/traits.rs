// ABOUTME: Defines the Tool trait - a named, schema-described unit of work.
// ABOUTME: Tools have a name, description, parameter schema, and async execute.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{ParameterSchema, ToolResult};

/// A tool that can be listed and invoked through the registry.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool within a registry snapshot.
    fn name(&self) -> &str;

    /// Returns a human-readable description for callers.
    fn description(&self) -> &str;

    /// Returns the parameter contract the dispatcher validates against.
    fn schema(&self) -> ParameterSchema;

    /// Execute the tool with validated, defaulted arguments.
    ///
    /// Expected domain conditions (an unknown location, say) are success
    /// results carrying fallback data; `Err` is reserved for genuine faults.
    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}
