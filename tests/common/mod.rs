//! Shared test utilities for E2E tests.
//!
//! Provides a project-directory fixture and re-exports the commonly used
//! test dependencies.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::FLAT);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Single flat resolver and a single rule.
    pub const FLAT: &str = r#"
template-root: test-templates
resolvers:
  flat: ["%t%/%s%"]
files:
  - label: some-label
    source: sub-path/some-file.txt
    target: provided/%s%
    resolver: flat
"#;

    /// Host/user qualified resolver ahead of the flat fallback.
    pub const QUALIFIED: &str = r#"
template-root: test-templates
resolvers:
  qualified:
    - "%t%/%h%/%u%/%s%"
    - "%t%/%s%"
files:
  - label: some-label
    source: sub-path/some-file.txt
    target: provided/%s%
    resolver: qualified
"#;
}

/// A temporary project directory with a configuration and template files.
pub struct TestFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write the `.files-provider.yaml` configuration.
    pub fn with_config(self, yaml: &str) -> Self {
        self.temp
            .child(".files-provider.yaml")
            .write_str(yaml)
            .expect("failed to write config");
        self
    }

    /// Write a template file (parent directories created as needed).
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.temp
            .child(relative)
            .write_str(content)
            .expect("failed to write file");
        self
    }

    /// The project root path.
    pub fn root(&self) -> &std::path::Path {
        self.temp.path()
    }

    /// A child path within the project root.
    pub fn child(&self, relative: &str) -> assert_fs::fixture::ChildPath {
        self.temp.child(relative)
    }
}
