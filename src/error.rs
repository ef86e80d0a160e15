//! Error types for the Waypoint library.
//!
//! All errors are represented by the [`WaypointError`] enum. The only error
//! class the core operations raise themselves is invalid-argument; everything
//! else exists for conversions from foreign error types.
//!
//! # Examples
//!
//! ```
//! use waypoint::error::{Result, WaypointError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WaypointError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// A caller supplied an argument that violates an operation's contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WaypointError.
pub type Result<T> = std::result::Result<T, WaypointError>;

impl WaypointError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WaypointError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WaypointError::Other(msg.into())
    }
}
