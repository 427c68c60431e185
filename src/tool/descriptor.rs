// ABOUTME: Defines ToolDescriptor - the published metadata for one tool.
// ABOUTME: Everything a caller may see; never the handler itself.

use serde_json::{json, Value};

use super::{ParameterSchema, Tool};

/// Identity and contract of one tool, excluding its implementation.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

impl ToolDescriptor {
    /// Capture the published metadata of a tool.
    pub fn of(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.schema(),
        }
    }

    /// Wire shape for the list endpoint: `{description, parameters}`.
    pub fn to_json(&self) -> Value {
        json!({
            "description": self.description,
            "parameters": self.parameters.to_json(),
        })
    }
}
