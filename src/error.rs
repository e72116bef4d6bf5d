//! # Error Handling
//!
//! Centralized error type for the `files-provider` library, built with
//! `thiserror`. Per-rule problems (a missing source, an unknown resolver
//! alias) are deliberately *not* represented here: the service reports them
//! through the `Io` collaborator and keeps going, so one broken rule never
//! blocks the others. The `Error` enum covers the failures that stop an
//! operation outright:
//!
//! - Configuration file parsing.
//! - Malformed `%env(...)%` placeholders.
//! - Underlying I/O and YAML errors.

use thiserror::Error;

/// Main error type for files-provider operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.files-provider.yaml`
    /// configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An `%env(...)%` placeholder could not be interpreted.
    ///
    /// Raised while expanding a single placeholder; callers handle it per
    /// rule and it never propagates into the main provisioning loop.
    #[error("Invalid environment placeholder {placeholder:?}: {message}")]
    Placeholder {
        placeholder: String,
        message: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
