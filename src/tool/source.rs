// ABOUTME: Defines the ToolSource trait - where a registry's definitions
// ABOUTME: come from. Reload rebuilds the snapshot from its configured source.

use std::sync::Arc;

use super::Tool;

/// Source of tool definitions for registry construction and reload.
pub trait ToolSource: Send + Sync {
    /// Produce a fresh set of tools, in registration order.
    fn load(&self) -> Result<Vec<Arc<dyn Tool>>, anyhow::Error>;
}

impl<F> ToolSource for F
where
    F: Fn() -> Result<Vec<Arc<dyn Tool>>, anyhow::Error> + Send + Sync,
{
    fn load(&self) -> Result<Vec<Arc<dyn Tool>>, anyhow::Error> {
        self()
    }
}
