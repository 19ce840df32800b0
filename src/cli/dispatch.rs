//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{
        handle_locate, handle_patterns, handle_preview, handle_report, handle_scan, ReportArgs,
    },
};
use crate::exit::InvisiblesExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<InvisiblesExit> {
    match command {
        Commands::Scan {
            files,
            input,
            json,
            verbose,
        } => handle_scan(&files, &input, json, verbose),
        Commands::Report {
            file,
            input,
            output,
            stdout,
            copy,
        } => handle_report(&ReportArgs {
            file,
            input,
            output,
            stdout,
            copy,
        }),
        Commands::Locate { index, file, input } => handle_locate(index, file.as_ref(), &input),
        Commands::Preview { file, input } => handle_preview(file.as_ref(), &input),
        Commands::Patterns { copy } => handle_patterns(copy.as_deref()),
    }
}
