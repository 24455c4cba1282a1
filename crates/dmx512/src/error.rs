//! Error types for DMX universe and driver operations
use thiserror::Error;

/// DMX errors
#[derive(Error, Debug)]
pub enum DmxError {
    /// Out-of-range address, footprint, or frame length
    #[error("validation error: {0}")]
    Validation(String),

    /// Overlapping light address ranges, rejected at registration
    #[error("address conflict: {0}")]
    Conflict(String),

    /// Light id not registered in this universe
    #[error("light not found: {0}")]
    NotFound(String),

    /// Driver name missing from the registry
    #[error("unknown driver: {0}")]
    UnknownDriver(String),

    /// Transport open/send/close failure
    #[error("driver error: {0}")]
    Driver(String),

    /// I/O error from a driver's underlying transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for DMX operations
pub type Result<T> = std::result::Result<T, DmxError>;
