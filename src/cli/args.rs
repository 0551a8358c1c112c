//! Command-line argument model.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gist",
    version,
    about = "Manage GitHub gists from the command line",
    after_help = "Configuration:\n  Set GITHUB_USER and GITHUB_TOKEN in environment or .env file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a gist from files
    Publish {
        /// Set description for the gist
        #[arg(short = 'd', long = "desc")]
        description: Option<String>,

        /// Make the gist public (default: private)
        #[arg(short, long)]
        public: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List all gists
    #[command(alias = "ls")]
    List {
        /// Only gists carrying this #tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Show every tag with its gist count
        #[arg(long)]
        tags: bool,
    },

    /// Show details of a gist (full id or unique prefix)
    Show { id: String },

    /// Refresh the local cache from GitHub
    Sync,

    /// Launch the interactive browser
    Tui,
}
