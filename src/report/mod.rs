//! Report renderers for ingredient analysis results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects
//!   `--verbose` / `--quiet`. JSON output is handled inline in `main` via
//!   `serde_json`.

pub mod terminal;
