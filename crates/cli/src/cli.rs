//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line client for the pastebin actor
#[derive(Debug, Parser)]
#[command(name = "pastebin", version)]
pub struct Cli {
    /// Directory holding local.yaml, staging.yaml and production.yaml
    #[arg(long, global = true, env = "PASTEBIN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Backend base URL, overrides `api_base_url` from the configuration
    #[arg(long, global = true, env = "PASTEBIN_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print the resolved configuration as JSON
    Config,
    /// Fetch a paste by id
    Get {
        /// Paste identifier
        paste_id: String,
    },
    /// Create a paste from an argument, a file, or stdin
    New {
        /// Paste contents
        #[arg(conflicts_with = "file")]
        code: Option<String>,
        /// Read paste contents from a file
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Write the built-in configuration records into a directory
    InitConfig {
        /// Target directory
        dir: PathBuf,
    },
}
