//! Integration tests for the public path helper surface

use richpath::{BasePathOps, Error, PlatformRules, RichPath, StdBaseOps};

/// Wraps the default base operations with a fixed working directory so the
/// default-root behavior can be checked without touching process state.
struct PinnedCwd {
    inner: StdBaseOps,
    cwd: String,
}

impl PinnedCwd {
    fn new(cwd: &str) -> Self {
        Self {
            inner: StdBaseOps::new(),
            cwd: cwd.to_string(),
        }
    }
}

impl BasePathOps for PinnedCwd {
    fn join(&self, base: &str, tail: &str) -> String {
        self.inner.join(base, tail)
    }

    fn normalize(&self, path: &str) -> String {
        self.inner.normalize(path)
    }

    fn extname(&self, path: &str) -> String {
        self.inner.extname(path)
    }

    fn dirname(&self, path: &str) -> String {
        self.inner.dirname(path)
    }

    fn basename(&self, path: &str) -> String {
        self.inner.basename(path)
    }

    fn resolve(&self, path: &str) -> String {
        self.inner.join(&self.cwd, path)
    }

    fn cwd(&self) -> String {
        self.cwd.clone()
    }
}

#[test]
fn test_default_helper_uses_host_rules() {
    let rich = RichPath::new();
    assert_eq!(rich.rules(), PlatformRules::detect());
}

#[test]
fn test_predicates_end_to_end() {
    let rich = RichPath::new();

    assert!(!rich.is_path_available("/folder/.svn"));
    assert!(rich.is_path_available("/folder/module"));
    assert!(rich.is_path_as_js("/folder/module.js"));
    assert!(!rich.is_path_as_js("/folder/module.json"));
}

#[test]
fn test_windows_rules_can_be_injected_on_any_host() {
    let rich = RichPath::with_rules(PlatformRules::Windows);

    assert!(!rich.is_path_absolute("C:cwd\\another"));
    assert!(rich.is_path_absolute("\\\\server\\file"));
    assert!(rich.is_path_absolute("C:\\Users\\"));
}

#[cfg(unix)]
#[test]
fn test_full_resolution_pipeline() {
    let rich = RichPath::with_rules(PlatformRules::Posix);

    let full = rich.parse_to_full_path("./lib/module", Some("/srv/app"), None).unwrap();
    assert_eq!(full, "/srv/app/lib/module.js");

    let full = rich.parse_to_full_path("/srv/app/lib/module.css", Some("/elsewhere"), Some("js")).unwrap();
    assert_eq!(full, "/srv/app/lib/module.css");

    assert!(rich.is_child_file("/srv/app/index.js", &full).unwrap());
}

#[cfg(unix)]
#[test]
fn test_default_root_comes_from_the_base_cwd() {
    let base = PinnedCwd::new("/home/midway/cwd");
    let rich = RichPath::with_base(base, PlatformRules::Posix);

    assert_eq!(
        rich.parse_path_to_absolute("./index.js", None).unwrap(),
        "/home/midway/cwd/index.js"
    );
    assert_eq!(
        rich.parse_to_full_path("./index", None, None).unwrap(),
        "/home/midway/cwd/index.js"
    );
}

#[test]
fn test_invalid_arguments_surface_as_errors() {
    let rich = RichPath::new();

    let err = rich.parse_path_to_absolute("", None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = rich.is_child_file("/home/app/index.js", "").unwrap_err();
    assert!(err.to_string().contains("child path"));
}

#[test]
fn test_base_operations_are_re_exported() {
    let rich = RichPath::new();

    assert_eq!(rich.extname("index.js"), ".js");
    assert_eq!(rich.basename("lib/index.js"), "index.js");
    assert!(!rich.resolve("index.js").is_empty());
}
