//! richpath - path helpers for module-loading and build pipelines
//!
//! Thin facade over the core engine; see `richpath-core` for the full API.
pub use richpath_core::*;
