//! Error types for pointops.
//!
//! All failures are detected at the call boundary and surfaced synchronously;
//! there are no transient failure modes and no partial results.

use std::fmt;
use thiserror::Error;

/// Error codes for pointops operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid argument provided (bad k, batch mismatch).
    InvalidArgument,
    /// Input data does not have the expected (B, N, 3) layout.
    ShapeMismatch,
    /// Index outside the valid range.
    OutOfRange,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorCode::ShapeMismatch => write!(f, "SHAPE_MISMATCH"),
            ErrorCode::OutOfRange => write!(f, "OUT_OF_RANGE"),
            ErrorCode::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Main error type for pointops operations.
#[derive(Error, Debug, Clone)]
pub struct PointOpsError {
    code: ErrorCode,
    message: String,
}

impl PointOpsError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    // Convenience constructors

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ShapeMismatch, msg)
    }

    /// Create an out of range error.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::OutOfRange, msg)
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for PointOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result type alias for pointops operations.
pub type Result<T> = std::result::Result<T, PointOpsError>;
