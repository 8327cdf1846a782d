//! Terminal front end for the magimente puzzle engine.
#![allow(missing_docs, clippy::missing_errors_doc)]

use std::process::ExitCode;

use clap::Parser;
use magimente_core::{Level, Operation};

use crate::app::App;

mod app;
mod render;

/// Magic-square arithmetic puzzles in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Difficulty of the first puzzle.
    #[arg(short, long, default_value_t = Level::Easy)]
    level: Level,

    /// Arithmetic operation of the first puzzle.
    #[arg(short, long, default_value_t = Operation::Add)]
    operation: Operation,

    /// Seed for puzzle selection; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match App::new(&args).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
