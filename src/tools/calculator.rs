// ABOUTME: Calculator tools - addNumbers and subtractNumbers.
// ABOUTME: Both take two required numeric parameters.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::tool::{ParamKind, ParamSpec, ParameterSchema, Tool, ToolResult};

fn operand(args: &Map<String, Value>, name: &str) -> Result<f64, anyhow::Error> {
    args.get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow::anyhow!("missing numeric parameter '{name}'"))
}

fn operand_schema() -> ParameterSchema {
    ParameterSchema::new()
        .param(ParamSpec::required("a", ParamKind::Number, "First operand"))
        .param(ParamSpec::required("b", ParamKind::Number, "Second operand"))
}

/// Tool adding two numbers.
pub struct AddNumbersTool;

#[async_trait]
impl Tool for AddNumbersTool {
    fn name(&self) -> &str {
        "addNumbers"
    }

    fn description(&self) -> &str {
        "Add two numbers together."
    }

    fn schema(&self) -> ParameterSchema {
        operand_schema()
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        let a = operand(&args, "a")?;
        let b = operand(&args, "b")?;
        let result = a + b;

        Ok(ToolResult::ok(
            json!({
                "operation": "addition",
                "a": a,
                "b": b,
                "result": result,
                "formula": format!("{a} + {b} = {result}"),
            }),
            format!("Added {a} and {b} to get {result}"),
        ))
    }
}

/// Tool subtracting the second number from the first.
pub struct SubtractNumbersTool;

#[async_trait]
impl Tool for SubtractNumbersTool {
    fn name(&self) -> &str {
        "subtractNumbers"
    }

    fn description(&self) -> &str {
        "Subtract the second number from the first."
    }

    fn schema(&self) -> ParameterSchema {
        operand_schema()
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        let a = operand(&args, "a")?;
        let b = operand(&args, "b")?;
        let result = a - b;

        Ok(ToolResult::ok(
            json!({
                "operation": "subtraction",
                "a": a,
                "b": b,
                "result": result,
                "formula": format!("{a} - {b} = {result}"),
            }),
            format!("Subtracted {b} from {a} to get {result}"),
        ))
    }
}
