use thiserror::Error;

/// Main error type for the capability scanner.
///
/// Probe-level rejections are never errors: a platform declining a
/// configuration is recorded as `supported = false` inside the report.
/// Only faults that invalidate the whole scan surface here.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Platform fixture error: {0}")]
    Fixture(String),

    #[error("Report export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("Internal scan failure: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScanError>;
