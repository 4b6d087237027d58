//! Error handling for the hashprobe library
//!
//! Lookups never fail; errors only come from construction, configuration and
//! from inserting into an open-addressing table whose probe limit is exhausted.

use crate::config::table::MAX_CAPACITY;
use thiserror::Error;

/// Main error type for the hashprobe library
#[derive(Error, Debug)]
pub enum HashProbeError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid data format or corruption
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// No free slot was reachable within the probe limit
    #[error("Table full: no free slot after {probes} probes (capacity {capacity})")]
    TableFull {
        /// Fixed capacity of the table
        capacity: usize,
        /// Number of slots examined before giving up
        probes: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl HashProbeError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData { message: message.into() }
    }

    /// Create a table full error
    pub fn table_full(capacity: usize, probes: usize) -> Self {
        Self::TableFull { capacity, probes }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// A full table stays full (there is no deletion or growth), so only I/O
    /// failures are worth retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::InvalidData { .. } => false,
            Self::TableFull { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidData { .. } => "data",
            Self::TableFull { .. } => "capacity",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HashProbeError>;

/// Reject zero and oversized capacities for fixed-size tables
#[inline]
pub fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        Err(HashProbeError::configuration("capacity must be greater than 0"))
    } else if capacity > MAX_CAPACITY {
        Err(HashProbeError::configuration(format!(
            "capacity {} exceeds maximum {}",
            capacity, MAX_CAPACITY
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HashProbeError::invalid_data("test message");
        assert_eq!(err.category(), "data");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_capacity_checking() {
        assert!(check_capacity(1).is_ok());
        assert!(check_capacity(MAX_CAPACITY).is_ok());

        let err = check_capacity(0).unwrap_err();
        assert_eq!(err.category(), "config");

        let err = check_capacity(MAX_CAPACITY + 1).unwrap_err();
        assert_eq!(err.category(), "config");
        assert!(check_capacity(usize::MAX).is_err());
    }

    #[test]
    fn test_error_categories() {
        let io_err = HashProbeError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        let full = HashProbeError::table_full(8, 8);
        assert_eq!(full.category(), "capacity");
        assert!(!full.is_recoverable());

        let config_err = HashProbeError::configuration("bad hasher");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = HashProbeError::table_full(16, 96);
        let display = format!("{}", err);
        assert!(display.contains("Table full"));
        assert!(display.contains("96"));
        assert!(display.contains("16"));

        let config_err = HashProbeError::configuration("capacity must be greater than 0");
        assert!(config_err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: HashProbeError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("I/O error"));
    }
}
