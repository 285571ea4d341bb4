//! Error types for Parts Admin
//!
//! This module provides unified error handling across the workspace:
//! gateway failures (transport, protocol, format), business-rule
//! rejections, identity resolution, draft validation, configuration and IO.

use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of characters of a response body kept in error messages
pub const BODY_EXCERPT_LIMIT: usize = 200;

/// The main error type for Parts Admin
#[derive(Debug, Error)]
pub enum AdminError {
    // ========================================================================
    // Gateway Errors
    // ========================================================================
    /// Network-level failure (DNS, refused connection, reset, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status} {reason}: {body_excerpt}")]
    Protocol {
        status: u16,
        reason: String,
        body_excerpt: String,
    },

    /// The response body could not be parsed as the expected structure
    #[error("Malformed response: {0}")]
    Format(String),

    /// The backend rejected the operation (duplicate key, failed rule)
    #[error("Rejected by backend: {0}")]
    Validation(String),

    /// The identity needed for update/delete could not be resolved
    #[error("Cannot resolve identity: {0}")]
    Identity(String),

    // ========================================================================
    // Form Errors
    // ========================================================================
    /// The draft failed client-side checks
    #[error("Invalid input: {}", .0.join("; "))]
    InvalidDraft(Vec<String>),

    /// A submit is already pending for this form
    #[error("A save is already in progress")]
    SubmitInProgress,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        AdminError::Transport(msg.into())
    }

    /// Create a protocol error, keeping only an excerpt of the body
    pub fn protocol(status: u16, reason: impl Into<String>, body: &str) -> Self {
        AdminError::Protocol {
            status,
            reason: reason.into(),
            body_excerpt: excerpt(body, BODY_EXCERPT_LIMIT),
        }
    }

    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        AdminError::Format(msg.into())
    }

    /// Create a validation (backend rejection) error
    pub fn validation(msg: impl Into<String>) -> Self {
        AdminError::Validation(msg.into())
    }

    /// Create an identity error
    pub fn identity(msg: impl Into<String>) -> Self {
        AdminError::Identity(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AdminError::Internal(msg.into())
    }

    /// Check if this error is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Transport(_))
    }

    /// Check if this error is a protocol error
    pub fn is_protocol(&self) -> bool {
        matches!(self, AdminError::Protocol { .. })
    }

    /// Check if this error is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, AdminError::Format(_) | AdminError::Json(_))
    }

    /// Check if this error is a validation error (backend or draft)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AdminError::Validation(_) | AdminError::InvalidDraft(_)
        )
    }

    /// Check if this error is an identity error
    pub fn is_identity(&self) -> bool {
        matches!(self, AdminError::Identity(_))
    }

    /// Check if this error is a file read or write error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            AdminError::FileRead { .. } | AdminError::FileWrite { .. }
        )
    }

    /// HTTP status carried by a protocol error
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using AdminError
pub type AdminResult<T> = Result<T, AdminError>;

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis
pub fn excerpt(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
