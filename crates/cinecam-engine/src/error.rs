//! Error types for camera placement.

use thiserror::Error;

/// Result type for camera placement operations.
pub type CameraResult<T> = Result<T, CameraError>;

/// Errors that can occur while resolving or framing a target.
///
/// The director's `generate_*` entry points never surface these to callers: they log the
/// error and degrade to `None` or an empty keyframe list.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("Journey endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("No camera candidates for target: {0}")]
    NoCandidates(String),

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CameraError {
    /// Create a target-not-found error.
    pub fn target_not_found(id: impl Into<String>) -> Self {
        Self::TargetNotFound(id.into())
    }

    /// Create an endpoint-not-found error.
    pub fn endpoint_not_found(id: impl Into<String>) -> Self {
        Self::EndpointNotFound(id.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Short reason label, used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            CameraError::TargetNotFound(_) => "target_not_found",
            CameraError::EndpointNotFound(_) => "endpoint_not_found",
            CameraError::NoCandidates(_) => "no_candidates",
            CameraError::InvalidCanvas { .. } => "invalid_canvas",
            CameraError::InvalidConfig(_) => "invalid_config",
            CameraError::ConfigParse(_) => "config_parse",
        }
    }
}
