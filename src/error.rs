// ABOUTME: Defines all error types for the toolgate library using thiserror.
// ABOUTME: Tool-layer errors map onto the wire envelope's errorKind values.

/// Top-level error type for the toolgate library.
#[derive(Debug, thiserror::Error)]
pub enum ToolgateError {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Errors from registry lookup, argument validation, and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("handler failed: {0}")]
    Handler(#[source] anyhow::Error),

    #[error("reload failed: {0}")]
    Reload(String),
}

/// Errors from the HTTP service boundary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
