//! The interactive shell driving the engine.

use std::io::{self, BufRead as _, Write as _};

use log::warn;
use magimente_catalog::StaticCatalog;
use magimente_core::{Level, Operation};
use magimente_game::{Engine, GameEvent, Line, SourceError};

use crate::{Args, render};

/// Errors that abort the shell.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Terminal I/O failed.
    Io(io::Error),
    /// The first puzzle could not be fetched.
    Source(SourceError),
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Place { row: usize, col: usize, payload: String },
    Undo,
    Redo,
    Reset,
    New { level: Option<Level>, operation: Option<Operation> },
    Show,
    Help,
    Quit,
}

pub struct App {
    engine: Engine,
    source: StaticCatalog,
    level: Level,
    operation: Operation,
}

impl App {
    pub fn new(args: &Args) -> Self {
        let source = args
            .seed
            .map_or_else(StaticCatalog::new, StaticCatalog::from_seed);
        Self {
            engine: Engine::with_sink(print_cue),
            source,
            level: args.level,
            operation: args.operation,
        }
    }

    /// Runs the shell until `quit` or end of input.
    pub fn run(mut self) -> Result<(), AppError> {
        self.engine
            .start_new_game(&mut self.source, self.level, self.operation)?;
        self.show();

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let Some(command) = parse_command(&line) else {
                continue;
            };

            match command {
                Command::Place { row, col, payload } => {
                    // Shell indices are 1-based.
                    if row == 0
                        || col == 0
                        || !self.engine.place(row - 1, col - 1, &payload)
                    {
                        println!("cannot place {payload} at ({row}, {col})");
                    } else {
                        self.show();
                    }
                }
                Command::Undo => {
                    if self.engine.undo() {
                        self.show();
                    } else {
                        println!("nothing to undo");
                    }
                }
                Command::Redo => {
                    if self.engine.redo() {
                        self.show();
                    } else {
                        println!("nothing to redo");
                    }
                }
                Command::Reset => {
                    if self.engine.reset() {
                        self.show();
                    }
                }
                Command::New { level, operation } => {
                    self.level = level.unwrap_or(self.level);
                    self.operation = operation.unwrap_or(self.operation);
                    match self
                        .engine
                        .start_new_game(&mut self.source, self.level, self.operation)
                    {
                        Ok(()) => self.show(),
                        Err(err) => {
                            warn!("puzzle fetch failed: {err}");
                            println!("no puzzle available: {err}");
                        }
                    }
                }
                Command::Show => self.show(),
                Command::Help => print_help(),
                Command::Quit => break,
            }
        }
        Ok(())
    }

    fn show(&self) {
        if let Some(view) = self.engine.view() {
            println!("{}", render::draw(&view));
        }
    }
}

fn print_cue(event: GameEvent) {
    match event {
        GameEvent::Placed => {}
        GameEvent::LineCompleted(Line::Row(i)) => println!("* row {} hits the target!", i + 1),
        GameEvent::LineCompleted(Line::Column(i)) => {
            println!("* column {} hits the target!", i + 1);
        }
        GameEvent::Won => println!("* every line hits the target - you win!"),
    }
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 place <row> <col> <number>   place a bank number (1-based indices)\n\
         \x20 undo | redo                  step through the move history\n\
         \x20 reset                        restore the current puzzle\n\
         \x20 new [level] [operation]      fetch a fresh puzzle\n\
         \x20 show                         redraw the board\n\
         \x20 quit                         leave"
    );
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return None,
        ["place", row, col, payload] => {
            let (Ok(row), Ok(col)) = (row.parse(), col.parse()) else {
                println!("usage: place <row> <col> <number>");
                return None;
            };
            Command::Place {
                row,
                col,
                payload: (*payload).to_owned(),
            }
        }
        ["undo"] => Command::Undo,
        ["redo"] => Command::Redo,
        ["reset"] => Command::Reset,
        ["new", rest @ ..] => {
            let mut level = None;
            let mut operation = None;
            for word in rest {
                if let Ok(parsed) = word.parse::<Level>() {
                    level = Some(parsed);
                } else if let Ok(parsed) = word.parse::<Operation>() {
                    operation = Some(parsed);
                } else {
                    println!("usage: new [easy|medium|hard] [add|sub|mul|div]");
                    return None;
                }
            }
            Command::New { level, operation }
        }
        ["show"] => Command::Show,
        ["help"] => Command::Help,
        ["quit" | "exit" | "q"] => Command::Quit,
        _ => {
            println!("unknown command (try 'help')");
            return None;
        }
    };
    Some(command)
}
