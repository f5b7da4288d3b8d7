use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Splits an optional device prefix (`C:` or a UNC `\\host\share`) from an
/// optional separator and the remainder of the path.
static SPLIT_DEVICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]:|[\\/]{2}[^\\/]+[\\/]+[^\\/]+)?([\\/])?").expect("device pattern is valid")
});

/// Which platform's path rules drive absolute-path classification.
///
/// Injected into [`RichPath`](crate::RichPath) at construction instead of
/// being re-detected per call, so classification stays consistent for the
/// lifetime of the value and alternate rules can be supplied in tests or
/// host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformRules {
    Windows,
    Posix,
}

impl PlatformRules {
    /// Rules for the platform this process is running on
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    pub fn is_windows(&self) -> bool {
        *self == Self::Windows
    }

    /// Check whether a path denotes an absolute location under these rules.
    ///
    /// Windows rules: absolute if a separator follows the optional device
    /// prefix, or the device is a UNC prefix. A drive letter without a
    /// separator (`C:cwd\another`) is drive-relative, not absolute.
    /// Posix rules: absolute if the path starts with `/`.
    pub fn is_absolute(&self, path: &str) -> bool {
        tracing::trace!("Classifying {:?} under {:?} rules", path, self);
        match self {
            Self::Windows => {
                let Some(caps) = SPLIT_DEVICE_RE.captures(path) else {
                    return false;
                };
                let device = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                let is_unc = !device.is_empty() && device.chars().nth(1) != Some(':');
                caps.get(2).is_some() || is_unc
            }
            Self::Posix => path.starts_with('/'),
        }
    }
}

impl Default for PlatformRules {
    fn default() -> Self {
        Self::detect()
    }
}
