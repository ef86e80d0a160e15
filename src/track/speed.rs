//! Instantaneous speed along a timestamped track.

use crate::error::{Result, WaypointError};
use crate::track::point::TimedPoint;

/// Return the instantaneous speed of an object `at_time` seconds after the
/// first point of `path`.
///
/// The requested time is converted to an absolute timestamp and the segments
/// are scanned in order; the first segment whose closed timestamp interval
/// contains it determines the speed (segment length divided by elapsed time).
/// A time landing exactly on an interior point therefore reports the speed of
/// the segment that ends there. Times past the last point yield `0.0`.
///
/// Timestamps are assumed non-decreasing; a zero-length interval that matches
/// the requested time divides by zero.
///
/// # Errors
///
/// Returns an invalid-argument error when `path` has fewer than two points.
pub fn speed_at_time(at_time: f64, path: &[TimedPoint]) -> Result<f64> {
    if path.len() < 2 {
        return Err(WaypointError::invalid_argument(
            "path must contain at least two points",
        ));
    }

    // The requested time is relative to the start of the track.
    let absolute_time = path[0].timestamp + at_time;

    for pair in path.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if absolute_time >= prev.timestamp && absolute_time <= next.timestamp {
            let distance = prev.distance_to(next);
            let interval = next.timestamp - prev.timestamp;
            return Ok(distance / interval);
        }
    }

    // Past the end of the track the object is no longer moving.
    Ok(0.0)
}
