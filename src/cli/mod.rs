//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to the build
//! command implementations.

mod build;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Sitebuild - compile, bundle, and watch a small front-end project
#[derive(Parser)]
#[command(name = "sitebuild")]
#[command(about = "Sitebuild - compile script modules and styles into public artifacts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline once: ensure, style, script, clean, bundle
    Build {
        /// Keep running and rebuild on filesystem changes
        #[arg(long)]
        watch: bool,

        /// Remove all compiled output before building
        #[arg(long)]
        full_clean: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Path to sitebuild.toml (default: discovered by walking up)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Build once, then watch for changes (same as `build --watch`)
    Watch {
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Path to sitebuild.toml (default: discovered by walking up)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Remove stale compiled output from the intermediate tree
    Clean {
        /// Remove every compiled file, not just stale ones
        #[arg(long)]
        all: bool,

        /// Path to sitebuild.toml (default: discovered by walking up)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { watch, full_clean, verbose, config } => {
            build::run_build(watch, full_clean, verbose, config.as_deref())
        }
        Commands::Watch { verbose, config } => {
            build::run_build(true, false, verbose, config.as_deref())
        }
        Commands::Clean { all, config } => build::run_clean(all, config.as_deref()),
    }
}
