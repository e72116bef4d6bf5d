//! # File Provide Handler
//!
//! Resolves one provisioning rule against its resolver and records exactly
//! one outcome in the task stack. The scan is first-hit-wins: candidates
//! are tried in pattern order and the first one that exists on disk ends
//! the scan, even if later candidates would also exist. When nothing
//! matches, a failed entry is recorded with the resolved target still
//! filled in, so reporting can show where the file would have gone.

use crate::path::normalize_path;
use crate::resolver::PathResolver;
use crate::task::{TaskEntry, TaskStack};
use std::path::{Path, PathBuf};

/// Matches one rule's candidate paths against the filesystem.
#[derive(Debug)]
pub struct FileProvideHandler<'a> {
    label: String,
    source: String,
    target: String,
    resolver: &'a PathResolver<'a>,
    project_root: PathBuf,
}

impl<'a> FileProvideHandler<'a> {
    /// Create a handler for a structurally valid rule.
    ///
    /// Relative candidate paths are checked against `project_root`; the
    /// recorded paths keep their resolved (project-relative) form.
    pub fn new(
        label: &str,
        source: &str,
        target: &str,
        resolver: &'a PathResolver<'a>,
        project_root: &Path,
    ) -> Self {
        Self {
            label: label.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            resolver,
            project_root: project_root.to_path_buf(),
        }
    }

    /// The rule's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scan the candidates in order and append the outcome to `stack`.
    ///
    /// Purely observational apart from existence checks; the copy happens
    /// later in the execution phase.
    pub fn match_into(&self, stack: &mut TaskStack) {
        let target = self.resolved_target();

        for candidate in self.resolver.resolved_patterns(&self.source) {
            // first hit wins
            let path = normalize_path(&candidate.path);
            if self.exists(&path) {
                stack.add(
                    &self.label,
                    TaskEntry {
                        source: path,
                        target,
                        matched: true,
                    },
                );
                return;
            }
        }

        // add failed state
        stack.add(
            &self.label,
            TaskEntry {
                source: String::new(),
                target,
                matched: false,
            },
        );
    }

    /// The rule's target pattern, substituted with the rule's original
    /// source (not a matched candidate) and normalized.
    fn resolved_target(&self) -> String {
        normalize_path(&self.resolver.replacer().replace(&self.target, &self.source))
    }

    fn exists(&self, path: &str) -> bool {
        let path = Path::new(path);
        if path.is_absolute() {
            path.exists()
        } else {
            self.project_root.join(path).exists()
        }
    }
}
