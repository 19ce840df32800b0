// src/bin/invisibles.rs
use clap::Parser;

use invisibles_core::cli::{dispatch, Cli};
use invisibles_core::exit::InvisiblesExit;

fn main() -> InvisiblesExit {
    let cli = Cli::parse();
    InvisiblesExit::from(dispatch::execute(cli.command))
}
