use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Loads namespace and package context into ApiGen page templates", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Element index to read (overrides the configured path)
    #[arg(short, long, global = true)]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// List the namespaces (or packages) of the index
    Groups,
    /// Print the template parameters of an element page as JSON
    Page {
        /// Fully qualified element name
        element: String,
        /// Compact JSON instead of the configured format
        #[arg(long)]
        compact: bool,
    },
    /// Show version information
    Version,
}
