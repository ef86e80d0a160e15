//! Timestamped 2D points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D coordinate paired with the timestamp at which a moving object
/// occupies it. Timestamps are seconds since an arbitrary epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Time at which the object is at this point, in seconds.
    pub timestamp: f64,
}

impl TimedPoint {
    /// Create a new timed point.
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        TimedPoint { x, y, timestamp }
    }

    /// Euclidean distance to another point, ignoring timestamps.
    pub fn distance_to(&self, other: &TimedPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for TimedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.timestamp)
    }
}
