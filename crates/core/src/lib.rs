//! richpath-core - path classification and resolution for module-loading tools
//!
//! This crate provides functionality to:
//! - Classify path strings without touching the file system (hidden, script, absolute)
//! - Resolve possibly-relative paths into absolute, extension-qualified paths
//! - Check textual parent/child containment between file paths
pub mod error;
pub mod interfaces;
pub mod richpath;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use interfaces::BasePathOps;
pub use richpath::{RichPath, SCRIPT_EXTNAME};
pub use services::StdBaseOps;
pub use types::PlatformRules;
