use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "invisibles",
    version,
    about = "Finds invisible Unicode characters in text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read text from. With no file and no flag, stdin is used.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read input from stdin
    #[arg(long)]
    pub stdin: bool,
    /// Read input from the system clipboard
    #[arg(long)]
    pub clipboard: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one or more inputs and summarize what was found
    Scan {
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
        /// Emit JSON instead of a colored summary
        #[arg(long)]
        json: bool,
        /// Show every finding with its context
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate the full analysis report
    Report {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
        /// Write the report to this path instead of the configured one
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Print the report to stdout instead of writing a file
        #[arg(long, short, conflicts_with = "output")]
        stdout: bool,
        /// Copy the report to the clipboard
        #[arg(long, short)]
        copy: bool,
    },
    /// Show the selection range and line/column around a position
    Locate {
        /// Position in the text, counted in Unicode scalar values
        index: usize,
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the text with invisible characters made visible
    Preview {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the detected character set
    Patterns {
        /// Copy a code such as U+200B to the clipboard
        #[arg(long, value_name = "CODE")]
        copy: Option<String>,
    },
}
