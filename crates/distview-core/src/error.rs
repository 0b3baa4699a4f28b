//! Error types for distribution views
//!
//! Provides a unified error type for all distview crates.

use thiserror::Error;

/// Core error type for binning and session operations
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter was outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The sample cannot be binned
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// IO error (renderers writing to a terminal or file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_sample() -> Self {
        Self::InvalidSample("sample is empty".to_string())
    }

    /// Create an error for a sample without a single finite value
    pub fn non_finite_sample(len: usize) -> Self {
        Self::InvalidSample(format!("all {len} values are NaN or infinite"))
    }

    /// Create an error for a bin count outside `[min, max]`
    pub fn bin_count_out_of_range(n: usize, min: usize, max: usize) -> Self {
        Self::InvalidArgument(format!("Bin count {n} must be in [{min}, {max}]"))
    }

    /// Create an error for a zero count where a positive one is required
    pub fn zero_count(what: &str) -> Self {
        Self::InvalidArgument(format!("{what} must be positive"))
    }

    /// Whether this error rejects a parameter value
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this error rejects the sample itself
    pub fn is_invalid_sample(&self) -> bool {
        matches!(self, Self::InvalidSample(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bins must be positive");

        let err = Error::InvalidSample("sample is empty".to_string());
        assert_eq!(err.to_string(), "Invalid sample: sample is empty");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_sample();
        assert!(err.is_invalid_sample());
        assert_eq!(err.to_string(), "Invalid sample: sample is empty");

        let err = Error::non_finite_sample(3);
        assert!(err.is_invalid_sample());
        assert_eq!(err.to_string(), "Invalid sample: all 3 values are NaN or infinite");

        let err = Error::bin_count_out_of_range(101, 4, 100);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: Bin count 101 must be in [4, 100]");

        let err = Error::zero_count("sample size");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: sample size must be positive");
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("terminal closed"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("chart backend went away");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("chart backend went away"));
            }
            _ => panic!("Wrong error type"),
        }
        assert!(!err.is_invalid_argument());
        assert!(!err.is_invalid_sample());
    }
}
