// ABOUTME: GetPlaceDescriptionTool - canned descriptions for known places.
// ABOUTME: Unknown places get a fixed fallback text, never a failure.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::tool::{ParamKind, ParamSpec, ParameterSchema, Tool, ToolResult};

use super::weather::DEFAULT_LOCATION;

/// Tool returning a short description of a place.
pub struct GetPlaceDescriptionTool;

fn describe(location: &str) -> String {
    match location {
        "Paris" => "Paris, the city of lights, known for its art, fashion, \
                    and the Eiffel Tower."
            .to_string(),
        "New York" => "New York, the city that never sleeps, home to Times \
                       Square and Central Park."
            .to_string(),
        "Tokyo" => "Tokyo, a dazzling blend of ultramodern life and \
                    traditional culture."
            .to_string(),
        "London" => "London, a historic capital on the Thames, from Big Ben \
                     to the West End."
            .to_string(),
        other => format!("{other}, a place with a story still waiting to be told."),
    }
}

#[async_trait]
impl Tool for GetPlaceDescriptionTool {
    fn name(&self) -> &str {
        "getPlaceDescription"
    }

    fn description(&self) -> &str {
        "Get a short description of a place."
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::new().param(
            ParamSpec::optional(
                "location",
                ParamKind::String,
                "Place to describe",
            )
            .with_default(DEFAULT_LOCATION),
        )
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult, anyhow::Error> {
        let location = args
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LOCATION);

        Ok(ToolResult::ok(
            json!({
                "location": location,
                "description": describe(location),
            }),
            format!("Place description retrieved for {location}"),
        ))
    }
}
