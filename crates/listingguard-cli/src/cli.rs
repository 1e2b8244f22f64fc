use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listingguard")]
#[command(
    author,
    version,
    about = "Screen listing keywords against prohibited terms and claim patterns"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LISTINGGUARD_CONFIG", default_value = "listingguard.yaml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify keywords
    Check {
        /// Keywords to check
        keywords: Vec<String>,

        /// Read keywords from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only print prohibited keywords
        #[arg(long)]
        only_prohibited: bool,
    },

    /// Add a term to the prohibited list
    Add {
        /// Term to add
        term: String,
    },

    /// Print the prohibited list
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
