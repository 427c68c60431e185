// ABOUTME: Built-in tools - dummy weather, time, place, and calculator
// ABOUTME: generators, plus the default reload source that registers them.

use std::sync::Arc;

use crate::tool::{Tool, ToolSource};

mod calculator;
mod place;
mod time;
mod weather;

pub use calculator::{AddNumbersTool, SubtractNumbersTool};
pub use place::GetPlaceDescriptionTool;
pub use time::GetTimeTool;
pub use weather::GetWeatherTool;

/// Default reload source: the static built-in definition list.
pub struct BuiltinSource;

impl ToolSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Arc<dyn Tool>>, anyhow::Error> {
        Ok(vec![
            Arc::new(GetWeatherTool),
            Arc::new(GetTimeTool),
            Arc::new(GetPlaceDescriptionTool),
            Arc::new(AddNumbersTool),
            Arc::new(SubtractNumbersTool),
        ])
    }
}
