//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use files_provider::output::OutputConfig;

use crate::commands;

/// Files Provider - Provision environment-specific files from templates
#[derive(Parser, Debug)]
#[command(name = "files-provider")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the provisioning pass for a lifecycle event
    Provide(commands::provide::ProvideArgs),

    /// Display the effective resolver and file configuration
    Info(commands::info::InfoArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Provide(args) => commands::provide::execute(args, output),
            Commands::Info(args) => commands::info::execute(args, output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
