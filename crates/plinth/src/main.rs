//! Plinth CLI - config-driven landing page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "plinth")]
#[command(about = "Config-driven landing page generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter landing.toml in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the landing page site
    Build {
        /// Path to the configuration file
        #[arg(short, long, default_value = "landing.toml")]
        config: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Directory of static assets to copy into the output
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// Skip stylesheet minification
        #[arg(long)]
        no_minify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
        Commands::Build {
            config,
            output,
            assets,
            no_minify,
        } => {
            commands::build::run(config, output, assets, !no_minify)?;
        }
    }

    Ok(())
}
