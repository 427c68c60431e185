// ABOUTME: GetTimeTool - current wall-clock time for a timezone label.
// ABOUTME: Absent timezone falls back to UTC.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::tool::{ParamKind, ParamSpec, ParameterSchema, Tool, ToolResult};

const DEFAULT_TIMEZONE: &str = "UTC";

/// Tool returning the current time, labelled with the requested timezone.
pub struct GetTimeTool;

#[async_trait]
impl Tool for GetTimeTool {
    fn name(&self) -> &str {
        "getTime"
    }

    fn description(&self) -> &str {
        "Get the current time and date for a timezone."
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::new().param(
            ParamSpec::optional(
                "timezone",
                ParamKind::String,
                "Timezone label, e.g. UTC",
            )
            .with_default(DEFAULT_TIMEZONE),
        )
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        let timezone = args
            .get("timezone")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TIMEZONE);

        let now = Utc::now();

        Ok(ToolResult::ok(
            json!({
                "timezone": timezone,
                "time": now.format("%H:%M:%S").to_string(),
                "date": now.format("%Y-%m-%d").to_string(),
            }),
            format!("Current time retrieved for {timezone}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_timezone() {
        let tool = GetTimeTool;
        let args = tool.schema().resolve(&Map::new()).unwrap();
        let result = tool.execute(args).await.unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["timezone"], "UTC");
        assert!(result.message.contains("UTC"));
    }

    #[tokio::test]
    async fn test_explicit_timezone() {
        let tool = GetTimeTool;
        let result = tool
            .execute(
                serde_json::json!({ "timezone": "Europe/Paris" })
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.data.unwrap()["timezone"], "Europe/Paris");
    }
}
