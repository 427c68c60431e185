// ABOUTME: Tests for the Registry - source loading, lookup, ordering, and
// ABOUTME: atomic reload semantics. Uses small mock tools.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use super::*;
use crate::error::ToolError;

/// A simple test tool with a configurable name.
struct EchoTool(&'static str);

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        self.0
    }

    fn description(&self) -> &str {
        "Echoes its own name"
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::new()
    }

    async fn execute(&self, _args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        Ok(ToolResult::ok(json!({ "name": self.0 }), self.0))
    }
}

fn source_of(names: &'static [&'static str]) -> impl ToolSource {
    move || -> Result<Vec<Arc<dyn Tool>>, anyhow::Error> {
        Ok(names
            .iter()
            .map(|n| Arc::new(EchoTool(n)) as Arc<dyn Tool>)
            .collect())
    }
}

#[tokio::test]
async fn test_from_source_and_get() {
    let registry = Registry::from_source(&source_of(&["echo"])).await.unwrap();

    let tool = registry.get("echo").await.unwrap();
    assert_eq!(tool.name(), "echo");
    assert_eq!(registry.count().await, 1);
}

#[tokio::test]
async fn test_get_nonexistent() {
    let registry = Registry::new();
    match registry.get("nonexistent").await {
        Err(ToolError::NotFound(name)) => assert_eq!(name, "nonexistent"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_preserves_registration_order() {
    let registry = Registry::from_source(&source_of(&["zeta", "alpha", "mid"]))
        .await
        .unwrap();

    let names: Vec<_> = registry.list().await.into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let registry = Registry::from_source(&source_of(&["echo"])).await.unwrap();
    assert!(registry.get("extra").await.is_err());

    let count = registry
        .reload(&source_of(&["echo", "extra"]))
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert!(registry.get("extra").await.is_ok());
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_snapshot() {
    let registry = Registry::from_source(&source_of(&["echo"])).await.unwrap();
    let before = registry.names().await;

    let failing = || -> Result<Vec<Arc<dyn Tool>>, anyhow::Error> {
        Err(anyhow::anyhow!("definitions unreachable"))
    };
    let err = registry.reload(&failing).await.unwrap_err();

    match err {
        ToolError::Reload(msg) => assert!(msg.contains("unreachable")),
        other => panic!("expected Reload, got {other:?}"),
    }
    assert_eq!(registry.names().await, before);
}

#[tokio::test]
async fn test_duplicate_names_rejected() {
    let err = Registry::from_source(&source_of(&["echo", "echo"]))
        .await
        .unwrap_err();

    match err {
        ToolError::Reload(msg) => assert!(msg.contains("duplicate")),
        other => panic!("expected Reload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_clone_shares_state() {
    let registry = Registry::new();
    let clone = registry.clone();

    registry.reload(&source_of(&["echo"])).await.unwrap();
    assert_eq!(clone.count().await, 1);
}

#[tokio::test]
async fn test_concurrent_readers_see_whole_snapshots() {
    let registry = Registry::from_source(&source_of(&["a", "b"])).await.unwrap();

    let reader = {
        let registry = registry.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let names = registry.names().await;
                // Either generation in full, never a partial merge.
                assert!(
                    names == vec!["a", "b"] || names == vec!["a", "b", "c"],
                    "saw partial snapshot: {names:?}"
                );
            }
        })
    };

    for _ in 0..50 {
        registry.reload(&source_of(&["a", "b", "c"])).await.unwrap();
        registry.reload(&source_of(&["a", "b"])).await.unwrap();
    }
    registry.reload(&source_of(&["a", "b", "c"])).await.unwrap();

    reader.await.unwrap();
}
