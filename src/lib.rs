//! # Files Provider Library
//!
//! This library provides the core functionality for environment-aware file
//! provisioning: it resolves, for each configured file rule, a concrete
//! source file on disk by trying an ordered list of templated path patterns
//! against the local environment, and copies the first match to a templated
//! target path. It backs the `files-provider` command-line tool but can be
//! embedded by other build tooling.
//!
//! ## Quick Example
//!
//! ```
//! use files_provider::replacer::PatternReplacer;
//! use files_provider::resolver::PathResolver;
//!
//! let replacer = PatternReplacer::new(
//!     "/projects/parent/my-project",
//!     "file-templates",
//!     "host.example",
//!     "alice",
//!     false,
//! );
//! let resolver = PathResolver::new(
//!     "default",
//!     &["%t%/%h%/%s%".to_string(), "%t%/%s%".to_string()],
//!     &replacer,
//! );
//!
//! let candidates = resolver.resolved_patterns(".editorconfig");
//! assert_eq!(candidates[0].path, "file-templates/host.example/.editorconfig");
//! assert_eq!(candidates[1].path, "file-templates/.editorconfig");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the typed `.files-provider.yaml` schema
//!   with its defaults merge and explicit validation.
//! - **Pattern Replacer (`replacer`)**: a one-time environment snapshot
//!   (hostname, username, DDEV flag) plus literal token substitution.
//! - **Path Resolver (`resolver`)**: a named, ordered pattern list; order
//!   encodes resolution priority, most specific first.
//! - **Handler (`handler`)**: the first-hit-wins scan that turns one rule
//!   into exactly one recorded outcome.
//! - **Task Stack (`task`)**: the per-run, label-grouped record of match
//!   outcomes that drives the copy phase.
//! - **Service (`service`)**: orchestration — build, match, copy, report —
//!   with per-rule failure isolation throughout.

pub mod config;
pub mod error;
pub mod handler;
pub mod output;
pub mod path;
pub mod placeholder;
pub mod replacer;
pub mod resolver;
pub mod service;
pub mod task;

#[cfg(test)]
mod path_proptest;
