//! Main path helper that layers predicates and resolution on the base operations

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    error::{Error, Result},
    interfaces::BasePathOps,
    services::StdBaseOps,
    types::PlatformRules,
};

/// The canonical script extension appended when none is present
pub const SCRIPT_EXTNAME: &str = ".js";

/// Matches paths that start with or contain a hidden file or folder:
/// a leading dot followed by a word character, or a separator followed
/// by a dot. Standalone `.`/`..`/`~` relative prefixes do not match.
static HIDDEN_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.\w|[\\/]\.").expect("hidden-segment pattern is valid")
});

/// Path helper for module-loading and build pipelines.
///
/// Exposes the base path operations by delegation next to the rich
/// predicates and resolution helpers built on them. Platform rules are
/// injected at construction and drive absolute-path classification only;
/// every other operation keeps host semantics. No operation touches the
/// file system.
pub struct RichPath<B: BasePathOps = StdBaseOps> {
    base: B,
    rules: PlatformRules,
}

impl RichPath<StdBaseOps> {
    /// Helper with host-detected platform rules
    pub fn new() -> Self {
        Self::with_rules(PlatformRules::detect())
    }

    /// Helper with explicit platform rules
    pub fn with_rules(rules: PlatformRules) -> Self {
        Self::with_base(StdBaseOps::new(), rules)
    }
}

impl Default for RichPath<StdBaseOps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BasePathOps> RichPath<B> {
    /// Helper with an explicit base operation implementation
    pub fn with_base(base: B, rules: PlatformRules) -> Self {
        Self { base, rules }
    }

    /// The platform rules this helper classifies with
    pub fn rules(&self) -> PlatformRules {
        self.rules
    }

    /// Check whether a path is free of hidden files or folders.
    ///
    /// Returns `false` for empty input and for paths starting with a
    /// dotted segment or containing one after a separator. Relative
    /// `.`/`..`/`~` prefixes stay available.
    pub fn is_path_available(&self, path: &str) -> bool {
        !path.is_empty() && !HIDDEN_SEGMENT_RE.is_match(path)
    }

    /// Check whether a path carries the script extension `.js`
    pub fn is_path_as_js(&self, path: &str) -> bool {
        !path.is_empty() && self.base.extname(path) == SCRIPT_EXTNAME
    }

    /// Check whether a path is absolute under the injected platform rules
    pub fn is_path_absolute(&self, path: &str) -> bool {
        self.rules.is_absolute(path)
    }

    /// Alias for [`is_path_absolute`](Self::is_path_absolute)
    pub fn is_absolute(&self, path: &str) -> bool {
        self.is_path_absolute(path)
    }

    /// Resolve a path against a root, defaulting to the current working
    /// directory.
    ///
    /// Relative input is joined onto the root. Absolute input is still
    /// passed through normalization, since some platform normalizers
    /// lower-case drive letters or collapse redundant separators. Fails
    /// with [`Error::InvalidArgument`] on an empty path.
    pub fn parse_path_to_absolute(&self, path: &str, root: Option<&str>) -> Result<String> {
        if path.is_empty() {
            return Err(Error::invalid_argument("file path"));
        }

        let resolved = if self.is_path_absolute(path) {
            self.base.normalize(path)
        } else {
            let root = match root {
                Some(root) => root.to_string(),
                None => self.base.cwd(),
            };
            self.base.join(&root, path)
        };
        debug!("Resolved {:?} to {:?}", path, resolved);
        Ok(resolved)
    }

    /// Append an extension unless the path already has one.
    ///
    /// The extension defaults to [`SCRIPT_EXTNAME`] and gets a leading `.`
    /// inserted when it lacks one. A bare trailing dot counts as an
    /// existing extension. Fails with [`Error::InvalidArgument`] on an
    /// empty path.
    pub fn add_extname_if_not_exists(&self, path: &str, extname: Option<&str>) -> Result<String> {
        if path.is_empty() {
            return Err(Error::invalid_argument("file path"));
        }

        if !self.base.extname(path).is_empty() {
            return Ok(path.to_string());
        }

        let extname = extname.unwrap_or(SCRIPT_EXTNAME);
        if extname.starts_with('.') {
            Ok(format!("{path}{extname}"))
        } else {
            Ok(format!("{path}.{extname}"))
        }
    }

    /// Resolve a path to its absolute, extension-qualified form.
    ///
    /// Applies [`parse_path_to_absolute`](Self::parse_path_to_absolute)
    /// then [`add_extname_if_not_exists`](Self::add_extname_if_not_exists).
    pub fn parse_to_full_path(
        &self,
        path: &str,
        root: Option<&str>,
        extname: Option<&str>,
    ) -> Result<String> {
        let absolute = self.parse_path_to_absolute(path, root)?;
        self.add_extname_if_not_exists(&absolute, extname)
    }

    /// Check whether the child file lives under the parent file's directory.
    ///
    /// Both paths are normalized, then the child's directory is compared
    /// against the parent's as a literal string prefix. The comparison is
    /// textual, not segment-aware: a parent in `/home/app` also claims a
    /// child in `/home/app2`. Fails with [`Error::InvalidArgument`] when
    /// either argument is empty.
    pub fn is_child_file(&self, parent_path: &str, child_path: &str) -> Result<bool> {
        if parent_path.is_empty() {
            return Err(Error::invalid_argument("parent path"));
        }
        if child_path.is_empty() {
            return Err(Error::invalid_argument("child path"));
        }

        let parent = self.base.normalize(parent_path);
        let child = self.base.normalize(child_path);

        Ok(self.base.dirname(&child).starts_with(&self.base.dirname(&parent)))
    }

    /// Join two paths and normalize the result
    pub fn join(&self, base: &str, tail: &str) -> String {
        self.base.join(base, tail)
    }

    /// Collapse `.`, `..` and duplicate separators textually
    pub fn normalize(&self, path: &str) -> String {
        self.base.normalize(path)
    }

    /// Extension of the final segment including its leading dot
    pub fn extname(&self, path: &str) -> String {
        self.base.extname(path)
    }

    /// Directory portion of a path
    pub fn dirname(&self, path: &str) -> String {
        self.base.dirname(path)
    }

    /// Final segment of a path
    pub fn basename(&self, path: &str) -> String {
        self.base.basename(path)
    }

    /// Absolute form of a path against the current working directory
    pub fn resolve(&self, path: &str) -> String {
        self.base.resolve(path)
    }
}
