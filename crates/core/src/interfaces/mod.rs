//! Core interfaces for the path helper
//!
//! This module defines the trait seam between the rich operations and the
//! underlying path library they are layered on.

pub mod base_ops;

pub use base_ops::BasePathOps;
