//! # Provide Command Implementation
//!
//! This module implements the `provide` subcommand, which runs one
//! provisioning pass: it loads the configuration, resolves every file rule
//! against the local environment, and copies each first-matching template
//! file to its target.
//!
//! Individual rule failures are reported but never change the exit code;
//! only a hard failure (an unreadable or malformed configuration file)
//! exits nonzero.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use files_provider::config::{ProviderConfig, DEFAULT_CONFIG_FILE};
use files_provider::output::{ConsoleIo, OutputConfig};
use files_provider::service::{FilesProviderService, EVENT_PRE_INSTALL};

/// Run the provisioning pass for a lifecycle event
#[derive(Args, Debug)]
pub struct ProvideArgs {
    /// Path to the configuration file, relative to the project root.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Project root directory the run resolves against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Lifecycle event name; doubles as the idempotency key when the host
    /// tool dispatches several hooks in one process run.
    #[arg(long, value_name = "NAME", default_value = EVENT_PRE_INSTALL)]
    pub event: String,
}

/// Execute the `provide` command.
pub fn execute(args: ProvideArgs, output: OutputConfig) -> Result<()> {
    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        args.project_root.join(&args.config)
    };

    let config = ProviderConfig::load_or_default(&config_path).map_err(|e| {
        anyhow::anyhow!("Failed to load config from {}: {}", config_path.display(), e)
    })?;

    let mut io = ConsoleIo::new(output);
    let mut service = FilesProviderService::new();
    service.process(&args.event, &args.project_root, &config, &mut io);
    Ok(())
}
