// ABOUTME: GetWeatherTool - dummy weather conditions for a location.
// ABOUTME: Deterministic per location; absent location falls back to New York.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::tool::{ParamKind, ParamSpec, ParameterSchema, Tool, ToolResult};

pub(crate) const DEFAULT_LOCATION: &str = "New York";

const CONDITIONS: [&str; 4] = ["sunny", "partly cloudy", "cloudy", "rainy"];

/// Tool returning dummy weather data for a location.
pub struct GetWeatherTool;

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &str {
        "getWeather"
    }

    fn description(&self) -> &str {
        "Get the current weather conditions for a location."
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::new().param(
            ParamSpec::optional(
                "location",
                ParamKind::String,
                "City to fetch weather for",
            )
            .with_default(DEFAULT_LOCATION),
        )
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        let location = args
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LOCATION);

        // Dummy data, stable per location name.
        let seed = location.len();
        let temperature = 12 + (seed % 16) as i64;
        let humidity = 40 + (seed * 7 % 50) as i64;
        let condition = CONDITIONS[seed % CONDITIONS.len()];

        Ok(ToolResult::ok(
            json!({
                "location": location,
                "temperature_c": temperature,
                "condition": condition,
                "humidity_percent": humidity,
            }),
            format!("Weather information retrieved for {location}"),
        ))
    }
}
