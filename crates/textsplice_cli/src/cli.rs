//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// textsplice - Find and replace text in hast trees
#[derive(Parser)]
#[command(name = "textsplice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply find-and-replace rules to a hast JSON tree
    Apply(ApplyArgs),

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    /// hast JSON file to read (`-` for stdin)
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text to find, instead of the configured rules
    #[arg(long)]
    pub find: Option<String>,

    /// Replacement for --find (matches are deleted when omitted)
    #[arg(long, requires = "find")]
    pub replace: Option<String>,

    /// Treat --find as a regular expression
    #[arg(long, requires = "find")]
    pub regex: bool,

    /// Match --find case-insensitively
    #[arg(short = 'i', long, requires = "regex")]
    pub ignore_case: bool,

    /// Tag names whose text is left alone, replacing the default set
    #[arg(long, value_name = "TAG", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Report whether anything would change without writing (exit code 1 if so)
    #[arg(long)]
    pub check: bool,
}
