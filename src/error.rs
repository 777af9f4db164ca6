//! Error types for the healthbot library
//!
//! Loading a knowledge base is the only fallible operation in the crate.
//! Answering a question never fails: "no answer" is an ordinary return value.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum KbError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Knowledge base resource does not exist
    #[error("Knowledge base not found: {path}")]
    NotFound { path: PathBuf },

    /// Resource exists but its rows cannot be interpreted
    #[error("Malformed knowledge base {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Not a knowledge base file: {path}")]
    InvalidResource { path: PathBuf },

    /// File exceeds the configured read limit
    #[error("Knowledge base too large: {path} ({size} bytes, limit {limit} bytes)")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: usize,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KbError>;

impl KbError {
    /// Create a new not found error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new malformed resource error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new invalid resource error
    pub fn invalid_resource(path: impl Into<PathBuf>) -> Self {
        Self::InvalidResource { path: path.into() }
    }

    /// Create a new too large error
    pub fn too_large(path: impl Into<PathBuf>, size: u64, limit: usize) -> Self {
        Self::TooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Map an I/O error raised while opening `path` to the matching kind
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            std::io::ErrorKind::InvalidData => {
                Self::malformed(path, format!("not valid UTF-8 text ({})", err))
            }
            _ => Self::Io(err),
        }
    }

    /// True when the resource is absent altogether
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if the caller can keep going with an empty knowledge base
    ///
    /// Only a missing resource is unrecoverable.
    pub fn is_recoverable(&self) -> bool {
        !self.is_not_found()
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Critical,
            Self::PermissionDenied { .. } | Self::InvalidResource { .. } => ErrorSeverity::High,
            Self::Malformed { .. } | Self::TooLarge { .. } => ErrorSeverity::Medium,
            Self::Io(_) if self.is_not_found() => ErrorSeverity::Critical,
            Self::Io(_) => ErrorSeverity::Medium,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_fatal() {
        let err = KbError::not_found("data/health_info.csv");
        assert!(err.is_not_found());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_malformed_is_recoverable() {
        let err = KbError::malformed("kb.csv", "missing column `Answer`");
        assert!(!err.is_not_found());
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            err.to_string(),
            "Malformed knowledge base kb.csv: missing column `Answer`"
        );
    }

    #[test]
    fn test_inaccessible_resources_are_recoverable() {
        let err = KbError::invalid_resource("data/health_info.csv");
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = KbError::permission_denied("data/health_info.csv");
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = KbError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_from_io_mapping() {
        let path = Path::new("kb.csv");

        let err = KbError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, KbError::NotFound { .. }));

        let err = KbError::from_io(
            path,
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, KbError::PermissionDenied { .. }));

        let err = KbError::from_io(path, std::io::Error::from(std::io::ErrorKind::InvalidData));
        assert!(matches!(err, KbError::Malformed { .. }));

        let err = KbError::from_io(path, std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(err, KbError::Io(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::High > ErrorSeverity::Medium);
        assert_eq!(ErrorSeverity::High.to_string(), "HIGH");
    }
}
