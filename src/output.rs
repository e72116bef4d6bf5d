//! # Console Output
//!
//! The [`Io`] trait is the seam between the provisioning service and the
//! terminal: the service reports every outcome as a human-readable line
//! through it and never prints directly. [`ConsoleIo`] is the production
//! implementation; tests record lines with an in-memory double.
//!
//! Color handling respects the usual conventions:
//! - `--color=never|always|auto` CLI flag
//! - `NO_COLOR` disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` disables colors, `CLICOLOR_FORCE=1` forces them
//! - `TERM=dumb` disables colors

use std::env;

/// Sink for human-readable status lines.
pub trait Io {
    /// Write an informational line.
    fn write(&mut self, message: &str);
    /// Write an error line.
    fn write_error(&mut self, message: &str);
}

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, and `auto` detects support from the
    /// environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Writes status lines to stdout/stderr, error lines in red when color is
/// enabled.
#[derive(Debug, Default)]
pub struct ConsoleIo {
    config: OutputConfig,
}

impl ConsoleIo {
    /// Create a console sink with the given color configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl Io for ConsoleIo {
    fn write(&mut self, message: &str) {
        println!("{}", message);
    }

    fn write_error(&mut self, message: &str) {
        if self.config.use_color {
            eprintln!("{}", console::style(message).red());
        } else {
            eprintln!("{}", message);
        }
    }
}

/// Records lines instead of printing them; for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryIo {
    /// Lines written via `write`.
    pub lines: Vec<String>,
    /// Lines written via `write_error`.
    pub errors: Vec<String>,
}

#[cfg(test)]
impl Io for MemoryIo {
    fn write(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn write_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
