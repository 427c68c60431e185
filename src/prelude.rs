// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolgate::prelude::*;` to get started quickly.

pub use crate::error::{ServerError, ToolError, ToolgateError};
pub use crate::server::Server;
pub use crate::tool::{
    Dispatcher, ErrorKind, ParamKind, ParamSpec, ParameterSchema, Registry, Tool, ToolDescriptor,
    ToolResult, ToolSource,
};
pub use crate::tools::{
    AddNumbersTool, BuiltinSource, GetPlaceDescriptionTool, GetTimeTool, GetWeatherTool,
    SubtractNumbersTool,
};
