//! Service implementations for the path helper
//!
//! This module provides the concrete implementation of the interface traits
//! on top of `std::path`.

pub mod std_base_ops;

pub use std_base_ops::StdBaseOps;
