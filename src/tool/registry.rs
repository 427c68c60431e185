// ABOUTME: Implements the Registry - an atomically reloadable snapshot of
// ABOUTME: tools, safe for concurrent lookup while a reload is in progress.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Tool, ToolDescriptor, ToolSource};
use crate::error::ToolError;

/// One fully-built generation of the registry.
///
/// Snapshots are immutable once published. Reload builds a replacement off
/// to the side and swaps it in whole, so readers see either the old set or
/// the new set, never a mix.
#[derive(Default)]
struct Snapshot {
    order: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, Arc<dyn Tool>>,
}

impl Snapshot {
    fn build(tools: Vec<Arc<dyn Tool>>) -> Result<Self, ToolError> {
        let mut by_name = HashMap::with_capacity(tools.len());
        for tool in &tools {
            if by_name
                .insert(tool.name().to_string(), Arc::clone(tool))
                .is_some()
            {
                return Err(ToolError::Reload(format!(
                    "duplicate tool name '{}'",
                    tool.name()
                )));
            }
        }
        Ok(Self {
            order: tools,
            by_name,
        })
    }
}

/// A thread-safe registry of tools with atomic wholesale reload.
pub struct Registry {
    snapshot: Arc<RwLock<Arc<Snapshot>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a source's current definitions.
    pub async fn from_source(source: &dyn ToolSource) -> Result<Self, ToolError> {
        let registry = Self::new();
        registry.reload(source).await?;
        Ok(registry)
    }

    /// Replace the active snapshot with a fresh load from `source`.
    ///
    /// On any failure the previous snapshot stays active. Returns the
    /// number of tools in the new snapshot.
    pub async fn reload(&self, source: &dyn ToolSource) -> Result<usize, ToolError> {
        let tools = source
            .load()
            .map_err(|e| ToolError::Reload(e.to_string()))?;
        let next = Arc::new(Snapshot::build(tools)?);
        let count = next.order.len();
        // The write lock is held only for the pointer swap.
        *self.snapshot.write().await = next;
        Ok(count)
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Result<Arc<dyn Tool>, ToolError> {
        let snapshot = self.read().await;
        snapshot
            .by_name
            .get(name)
            .cloned()
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Descriptors for all tools, in registration order.
    pub async fn list(&self) -> Vec<ToolDescriptor> {
        let snapshot = self.read().await;
        snapshot
            .order
            .iter()
            .map(|t| ToolDescriptor::of(t.as_ref()))
            .collect()
    }

    /// Names of all tools, in registration order.
    pub async fn names(&self) -> Vec<String> {
        let snapshot = self.read().await;
        snapshot
            .order
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    /// Get the number of registered tools.
    pub async fn count(&self) -> usize {
        self.read().await.order.len()
    }

    /// Clone the current snapshot pointer and release the lock, so readers
    /// never hold it across handler execution or reload construction.
    async fn read(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(Snapshot::default()))),
        }
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}
