//! Error types for the extraction pipeline.
//!
//! Extraction failures are fatal for the run (no retries, no partial-page
//! recovery); everything else the pipeline encounters degrades to "fewer
//! entries" rather than an error.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing entries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fragment source failed to produce a page
    #[error("Failed to read page {page}: {reason}")]
    Source {
        /// Zero-based page index that could not be read
        page: usize,
        /// Reason reported by the source
        reason: String,
    },

    /// Invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (from caller-provided fragment sources)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error() {
        let err = Error::Source {
            page: 12,
            reason: "document stream truncated".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 12"));
        assert!(msg.contains("truncated"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = Error::InvalidConfig("column 1 is inverted".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("column 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
