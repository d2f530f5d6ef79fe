// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scanner application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for calls into external capabilities
pub type BackendResult<T> = Result<T, BackendError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// An external capability failed
    Backend(BackendError),
    /// The scan flow ended without a usable result
    Scan(ScanError),
    /// Configuration errors
    Config(String),
    /// Localization errors
    I18n(String),
    /// Generic error with message
    Other(String),
}

/// Failures reported by the scanner, browser, or notification backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The permission query itself failed
    PermissionQuery(String),
    /// The scanner could not start or decode
    Scanner(String),
    /// The browser could not be launched
    Browser(String),
    /// The notification layer could not present or read an answer
    Notifier(String),
    /// The backend has no such capability (e.g. no torch)
    Unsupported(&'static str),
}

/// Scan flow errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The user denied camera access or declined the prompt
    PermissionDenied,
    /// The platform could not settle on a permission (restricted, unknown)
    PermissionUndetermined,
    /// The permission query threw
    PlatformQueryFailure(String),
    /// Decoded text does not look like a URL
    InvalidPayload(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Backend(e) => write!(f, "Backend error: {}", e),
            AppError::Scan(e) => write!(f, "Scan error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::I18n(msg) => write!(f, "Localization error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::PermissionQuery(msg) => write!(f, "Permission query failed: {}", msg),
            BackendError::Scanner(msg) => write!(f, "Scanner failed: {}", msg),
            BackendError::Browser(msg) => write!(f, "Browser failed: {}", msg),
            BackendError::Notifier(msg) => write!(f, "Notification failed: {}", msg),
            BackendError::Unsupported(what) => write!(f, "Not supported: {}", what),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::PermissionDenied => write!(f, "Camera permission denied"),
            ScanError::PermissionUndetermined => write!(f, "Camera permission undetermined"),
            ScanError::PlatformQueryFailure(msg) => {
                write!(f, "Permission check failed: {}", msg)
            }
            ScanError::InvalidPayload(content) => {
                write!(f, "Scanned content is not a URL: {}", content)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for BackendError {}
impl std::error::Error for ScanError {}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::Backend(err)
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        AppError::Scan(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
