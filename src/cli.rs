//! CLI definitions for mvcore.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mvcore CLI.
#[derive(Parser)]
#[command(name = "mvcore")]
#[command(about = "Model tier of a Model-View-Controller toolkit")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/mvcore.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run a scripted register/retrieve/remove session (default)
    Session {
        /// Core to run the session against
        #[arg(long, default_value = "main")]
        core: String,
    },

    /// Validate the configuration file and report problems
    Check,
}
