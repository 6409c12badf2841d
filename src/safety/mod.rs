//! Local ingredient safety classification.
//!
//! - [`descriptions`] — display text lookup with generic per-status fallbacks.
//! - [`classifier`] — denylist substring matching and summary aggregation;
//!   pure functions, no I/O.

pub mod classifier;
pub mod descriptions;
