// ABOUTME: Defines the ToolResult type - the uniform envelope returned by
// ABOUTME: every invocation, whether it succeeded, failed validation, or faulted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Wire-level classification of an invocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    HandlerFailure,
    ReloadFailure,
}

/// Result of a tool invocation.
///
/// Handlers and the dispatcher's own validation failures both produce this
/// shape, so callers never special-case transport errors vs domain errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the invocation succeeded.
    pub success: bool,

    /// Structured payload, omitted on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Human-readable summary of the outcome.
    pub message: String,

    /// Failure classification, omitted on success.
    #[serde(rename = "errorKind", skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl ToolResult {
    /// Create a successful result with structured data.
    pub fn ok(data: Value, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error_kind: None,
        }
    }

    /// Create a failed result.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            error_kind: Some(kind),
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        let kind = match &err {
            ToolError::NotFound(_) => ErrorKind::NotFound,
            ToolError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ToolError::Handler(_) => ErrorKind::HandlerFailure,
            ToolError::Reload(_) => ErrorKind::ReloadFailure,
        };
        Self::failure(kind, err.to_string())
    }
}
