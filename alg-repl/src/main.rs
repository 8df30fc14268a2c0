//! Command loop for identifying algebraic expressions.
//!
//! Given command line arguments, the arguments are joined and run as a single command line, e.g.
//! `alg-repl solve 2*x + 1 = 7`. Given input piped to stdin, each line is run as a command line.
//! Otherwise, commands are read interactively until `close` or end of input.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=alg_parser=debug`) to see how expressions are folded.

mod command;
mod error;

use alg_parser::op::OperatorTable;
use command::{Action, CommandTable, Session, GOODBYE};
use error::ReplError;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

const WELCOME: &str = "Welcome to the Mader Algrebraic Expression Solver.";
const PROMPT: &str = "\ncommand> ";

/// Installs a subscriber that writes log events to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints the welcome message followed by the list of commands.
fn welcome(session: &Session) -> Result<(), ReplError> {
    println!("{}", WELCOME);
    command::list_commands(session, "", &mut io::stdout())?;
    Ok(())
}

/// Runs a single command line, reporting any error to stderr.
fn run_line(session: &Session, line: &str) -> Action {
    match session.execute(line, &mut io::stdout()) {
        Ok(action) => action,
        Err(err) => {
            if let Err(report_err) = err.report_to_stderr(line) {
                eprintln!("{}", report_err);
            }
            Action::Continue
        },
    }
}

/// Reads one line at the prompt and runs it.
fn process_line(rl: &mut DefaultEditor, session: &Session) -> Result<Action, ReadlineError> {
    let input = rl.readline(PROMPT)?;
    if input.trim().is_empty() {
        return Ok(Action::Continue);
    }

    rl.add_history_entry(&input)?;
    Ok(run_line(session, &input))
}

fn main() {
    init_tracing();

    let commands = CommandTable::standard();
    let session = Session { commands: &commands, operators: OperatorTable::standard() };

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        run_line(&session, &args.join(" "));
        return;
    }

    if let Err(err) = welcome(&session) {
        err.report_to_stderr("").ok();
    }

    if !io::stdin().is_terminal() {
        // run each piped line as a command
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            };

            if line.trim().is_empty() {
                continue;
            }
            if run_line(&session, &line) == Action::Close {
                return;
            }
        }
        println!("{}", GOODBYE);
        return;
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    loop {
        match process_line(&mut rl, &session) {
            Ok(Action::Continue) => (),
            Ok(Action::Close) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => println!("{}", GOODBYE),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}
