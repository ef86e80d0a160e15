//! Track telemetry for an object moving along a piecewise-linear path.
//!
//! A track is an ordered slice of [`TimedPoint`] values, assumed sorted by
//! non-decreasing timestamp. The object travels in straight lines between
//! consecutive points and passes through each point at its timestamp.

pub mod point;
pub mod speed;

// Re-export commonly used types
pub use point::*;
pub use speed::*;
