//! # Configuration Schema and Parsing
//!
//! Typed representation of the `.files-provider.yaml` configuration file
//! and the merge with built-in defaults.
//!
//! ```yaml
//! template-root: file-templates
//! resolvers:
//!   default:
//!     - "%t%/%h%/%u%/%s%"
//!     - "%t%/%s%"
//! files:
//!   - label: editor config
//!     source: .editorconfig
//!     target: .editorconfig
//!     resolver: default
//! ```
//!
//! Merging is deterministic and field-by-field: a configured resolver
//! replaces the built-in pattern list wholesale, the one exception being
//! the `default` resolver, which falls back to the built-in list when it is
//! absent or empty. Validation is explicit — [`ProviderConfig::validate`]
//! returns a list of field-level issues instead of silently coercing bad
//! values, and the service skips the offending entries without aborting.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Template root folder used when the configuration does not set one.
pub const DEFAULT_TEMPLATE_ROOT: &str = "file-templates";

/// Alias of the built-in resolver.
pub const DEFAULT_RESOLVER_ALIAS: &str = "default";

/// Default configuration file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = ".files-provider.yaml";

/// Built-in pattern list for the `default` resolver, most specific first.
pub fn default_resolver_patterns() -> Vec<String> {
    [
        "%t%/%h%/%u%/%pp%/%p%/%s%",
        "%t%/%h%/%u%/%p%/%s%",
        "%t%/%h%/%u%/%s%",
        "%t%/%h%/%pp%/%p%/%s%",
        "%t%/%h%/%p%/%s%",
        "%t%/%h%/%s%",
        "%t%/%u%/%pp%/%p%/%s%",
        "%t%/%u%/%p%/%s%",
        "%t%/%u%/%s%",
        "%t%/%pp%/%p%/%s%",
        "%t%/%p%/%s%",
        "%t%/%DDEV%/%s%",
        "%t%/default/%s%",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

/// A single file provisioning rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRule {
    /// Display label; defaults to the source path when blank.
    #[serde(default)]
    pub label: String,
    /// Logical source path, relative to the template tree.
    #[serde(default)]
    pub source: String,
    /// Target pattern; may contain `%s%` and `%env(...)%` placeholders.
    #[serde(default)]
    pub target: String,
    /// Resolver alias; empty means `default`.
    #[serde(default)]
    pub resolver: String,
}

impl FileRule {
    /// The effective label: the configured one, or the source path.
    pub fn label(&self) -> &str {
        if self.label.is_empty() {
            &self.source
        } else {
            &self.label
        }
    }

    /// The logical source path with any leading `/` stripped.
    pub fn source(&self) -> &str {
        self.source.trim_start_matches('/')
    }

    /// The effective resolver alias; empty falls back to `default`.
    pub fn resolver_alias(&self) -> &str {
        if self.resolver.is_empty() {
            DEFAULT_RESOLVER_ALIAS
        } else {
            &self.resolver
        }
    }
}

/// The full files-provider configuration, after the defaults merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Root folder of the template tree.
    #[serde(rename = "template-root", default = "default_template_root")]
    pub template_root: String,
    /// Resolver alias to ordered pattern list.
    #[serde(default)]
    pub resolvers: BTreeMap<String, Vec<String>>,
    /// File provisioning rules, in declaration order.
    #[serde(default)]
    pub files: Vec<FileRule>,
}

fn default_template_root() -> String {
    DEFAULT_TEMPLATE_ROOT.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            template_root: default_template_root(),
            resolvers: BTreeMap::new(),
            files: Vec::new(),
        }
        .with_defaults()
    }
}

/// A single field-level configuration problem.
///
/// Issues are reported and the offending entry skipped; they never abort a
/// provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `files[2].source`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ProviderConfig {
    /// Parse a YAML document and apply the defaults merge.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: Some(
                "expected 'template-root', 'resolvers' (alias to pattern list) and 'files' (list of rules)"
                    .to_string(),
            ),
        })?;
        Ok(config.with_defaults())
    }

    /// Load from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::parse(&yaml)
    }

    /// Load from a YAML file, falling back to the defaults when the file
    /// does not exist. A present but malformed file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Ensure the `default` resolver exists: an absent or empty entry is
    /// replaced by the built-in pattern list. Everything else is kept as
    /// configured (wholesale, no per-element merging).
    fn with_defaults(mut self) -> Self {
        let needs_default = self
            .resolvers
            .get(DEFAULT_RESOLVER_ALIAS)
            .map(|patterns| patterns.iter().all(|p| p.is_empty()))
            .unwrap_or(true);
        if needs_default {
            self.resolvers.insert(
                DEFAULT_RESOLVER_ALIAS.to_string(),
                default_resolver_patterns(),
            );
        }
        self
    }

    /// Collect field-level problems without failing.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.template_root.is_empty() {
            issues.push(ValidationIssue {
                field: "template-root".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        for (alias, patterns) in &self.resolvers {
            if alias.is_empty() {
                issues.push(ValidationIssue {
                    field: "resolvers".to_string(),
                    message: "resolver alias must not be empty".to_string(),
                });
            }
            if patterns.iter().all(|p| p.is_empty()) {
                issues.push(ValidationIssue {
                    field: format!("resolvers.{}", alias),
                    message: "pattern list must contain at least one non-empty pattern"
                        .to_string(),
                });
            }
        }

        for (index, rule) in self.files.iter().enumerate() {
            if rule.source.is_empty() {
                issues.push(ValidationIssue {
                    field: format!("files[{}].source", index),
                    message: "no source pattern set".to_string(),
                });
            }
            if rule.target.is_empty() {
                issues.push(ValidationIssue {
                    field: format!("files[{}].target", index),
                    message: "no target pattern set".to_string(),
                });
            }
            let alias = rule.resolver_alias();
            if !self.resolvers.contains_key(alias)
                && !self.resolvers.contains_key(DEFAULT_RESOLVER_ALIAS)
            {
                issues.push(ValidationIssue {
                    field: format!("files[{}].resolver", index),
                    message: format!("unknown resolver {:?} and no default to fall back to", alias),
                });
            }
        }

        issues
    }
}
