//! Default base path operations
//!
//! Provides standard `std::path` based implementations of the base
//! operations, with string conventions matching the module-loader world:
//! extnames carry their leading dot and an empty directory portion reads
//! as `"."`.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::interfaces::BasePathOps;

/// Default implementation of [`BasePathOps`] using `std::path`
pub struct StdBaseOps;

impl StdBaseOps {
    pub fn new() -> Self {
        Self
    }
}

impl BasePathOps for StdBaseOps {
    fn join(&self, base: &str, tail: &str) -> String {
        let joined = Path::new(base).join(tail);
        self.normalize(&joined.to_string_lossy())
    }

    fn normalize(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }

        let mut parts: Vec<Component> = Vec::new();
        for component in Path::new(path).components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match parts.last() {
                    // `..` never pops past a root or a device prefix
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    Some(Component::Normal(_)) => {
                        parts.pop();
                    }
                    _ => parts.push(component),
                },
                c => parts.push(c),
            }
        }

        let joined: PathBuf = parts.into_iter().collect();
        let normalized = joined.to_string_lossy().into_owned();
        if normalized.is_empty() {
            ".".to_string()
        } else {
            normalized
        }
    }

    fn extname(&self, path: &str) -> String {
        match Path::new(path).extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => String::new(),
        }
    }

    fn dirname(&self, path: &str) -> String {
        match Path::new(path).parent() {
            Some(parent) if parent.as_os_str().is_empty() => ".".to_string(),
            Some(parent) => parent.to_string_lossy().into_owned(),
            None if path.is_empty() => ".".to_string(),
            None => path.to_string(),
        }
    }

    fn basename(&self, path: &str) -> String {
        Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn resolve(&self, path: &str) -> String {
        if Path::new(path).is_absolute() {
            self.normalize(path)
        } else {
            self.join(&self.cwd(), path)
        }
    }

    fn cwd(&self) -> String {
        env::current_dir()
            .map_or_else(|_| ".".to_string(), |dir| dir.to_string_lossy().into_owned())
    }
}
