//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which displays the
//! effective files-provider configuration: the environment snapshot, every
//! resolver with its pattern list, and every file rule with its resolved
//! candidate paths.
//!
//! This command is a safe, read-only operation that does not modify any
//! files; it always exits 0.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use files_provider::config::{ProviderConfig, DEFAULT_CONFIG_FILE};
use files_provider::output::{ConsoleIo, Io, OutputConfig};
use files_provider::service::FilesProviderService;

/// Display the effective resolver and file configuration
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the configuration file, relative to the project root.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Project root directory the configuration resolves against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: OutputConfig) -> Result<()> {
    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        args.project_root.join(&args.config)
    };

    let config = ProviderConfig::load_or_default(&config_path).map_err(|e| {
        anyhow::anyhow!("Failed to load config from {}: {}", config_path.display(), e)
    })?;

    let mut io = ConsoleIo::new(output);
    io.write(&format!("Configuration: {}", config_path.display()));

    let service = FilesProviderService::new();
    service.info(&args.project_root, &config, &mut io);
    Ok(())
}
