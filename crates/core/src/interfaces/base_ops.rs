//! Base path operation interface
//!
//! Provides abstraction over the underlying path library so the ambient
//! reads (the current working directory) can be pinned in tests without
//! mutating process state.

/// Trait for the base path operations the rich helpers are built on.
///
/// All operations are string-in/string-out with host-platform semantics
/// and perform no file system access.
pub trait BasePathOps: Send + Sync {
    /// Join two paths and normalize the result
    fn join(&self, base: &str, tail: &str) -> String;

    /// Collapse `.`, `..` and duplicate separators textually.
    ///
    /// Empty input and fully-collapsed relative input yield `"."`. A `..`
    /// never pops past a root, and leading `..` segments of relative paths
    /// are preserved.
    fn normalize(&self, path: &str) -> String;

    /// Extension of the final segment including its leading dot (`".js"`).
    ///
    /// Returns `"."` for a bare trailing dot and `""` when there is no
    /// extension; dotfiles such as `.svn` have none.
    fn extname(&self, path: &str) -> String;

    /// Directory portion of a path; `"."` when there is none, and a lone
    /// root returns itself
    fn dirname(&self, path: &str) -> String;

    /// Final segment of a path; `""` for a lone root or empty input
    fn basename(&self, path: &str) -> String;

    /// Absolute form of a path against the current working directory,
    /// normalized
    fn resolve(&self, path: &str) -> String;

    /// The process current working directory, read fresh per call
    fn cwd(&self) -> String;
}
