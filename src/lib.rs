//! # Waypoint
//!
//! A small collection of path, fuzzy word matching, and track telemetry
//! utilities for Rust.
//!
//! ## Features
//!
//! - Common-base computation for filesystem-style paths
//! - Closest-word lookup via Levenshtein edit distance
//! - Instantaneous speed along a piecewise-linear, timestamped track
//!
//! Every operation is a pure, synchronous function over caller-owned inputs:
//! no shared state, no I/O, safe to call from any number of threads.

pub mod error;
pub mod fuzzy;
pub mod path;
pub mod track;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
