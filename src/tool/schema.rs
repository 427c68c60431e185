// ABOUTME: Typed parameter schema for tools - parameter kinds, requiredness,
// ABOUTME: declared defaults, and validation of raw argument maps.

use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// The JSON type a parameter value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// The JSON Schema type name for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Object => "object",
            ParamKind::Array => "array",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Object => value.is_object(),
            ParamKind::Array => value.is_array(),
        }
    }
}

/// Contract for a single named parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub description: String,
    pub required: bool,
    pub default: Option<Value>,
}

impl ParamSpec {
    /// A parameter the caller must supply.
    pub fn required(
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: true,
            default: None,
        }
    }

    /// A parameter the caller may omit.
    pub fn optional(
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
            default: None,
        }
    }

    /// Declare the value substituted when the parameter is absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Ordered parameter contract for one tool.
#[derive(Debug, Clone, Default)]
pub struct ParameterSchema {
    params: Vec<ParamSpec>,
}

impl ParameterSchema {
    /// Create an empty schema (a tool taking no parameters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Names must be unique within a schema.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        debug_assert!(
            self.params.iter().all(|p| p.name != spec.name),
            "duplicate parameter name '{}'",
            spec.name
        );
        self.params.push(spec);
        self
    }

    /// The declared parameters, in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// JSON Schema shaped view for the list endpoint.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for spec in &self.params {
            properties.insert(
                spec.name.clone(),
                json!({
                    "type": spec.kind.type_name(),
                    "description": spec.description,
                }),
            );
            if spec.required {
                required.push(Value::String(spec.name.clone()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Validate raw caller arguments and produce the mapping handlers see.
    ///
    /// Null and empty-string values count as absent. Required parameters
    /// must be present; present values must match their declared kind;
    /// declared defaults fill in missing optionals. Unknown parameters are
    /// ignored - the schema is advisory, not a closed contract.
    pub fn resolve(&self, raw: &Map<String, Value>) -> Result<Map<String, Value>, ToolError> {
        let mut resolved = Map::new();
        for spec in &self.params {
            match raw.get(&spec.name).filter(|v| !is_absent(v)) {
                Some(value) => {
                    if !spec.kind.matches(value) {
                        return Err(ToolError::InvalidArgument(format!(
                            "parameter '{}' must be a {}",
                            spec.name,
                            spec.kind.type_name()
                        )));
                    }
                    resolved.insert(spec.name.clone(), value.clone());
                }
                None => {
                    if spec.required {
                        return Err(ToolError::InvalidArgument(format!(
                            "missing required parameter '{}'",
                            spec.name
                        )));
                    }
                    if let Some(default) = &spec.default {
                        resolved.insert(spec.name.clone(), default.clone());
                    }
                }
            }
        }
        Ok(resolved)
    }
}

fn is_absent(value: &Value) -> bool {
    value.is_null() || value.as_str().is_some_and(str::is_empty)
}
