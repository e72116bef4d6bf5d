//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `files-provider` command-line tool. Each subcommand is defined in its
//! own file to keep the logic separated and maintainable.
//!
//! Each command module contains an `Args` struct defining the
//! command-specific options (derived with `clap`) and an `execute` function
//! that performs the command's logic by calling into the `files_provider`
//! library.

pub mod completions;
pub mod info;
pub mod provide;
