//! The commands understood by the command loop, and the checks a command line goes through before
//! one of them runs.

use alg_attrs::ErrorKind;
use alg_error::{Error, ErrorKind, EXPR};
use alg_parser::{identify, op::OperatorTable};
use ariadne::Fmt;
use crate::error::ReplError;
use levenshtein::levenshtein;
use std::{io::Write, ops::Range};
use tracing::debug;

/// The message printed when the command loop ends.
pub const GOODBYE: &str = "\nThank you for using the Mader Algebraic Expression Solver.";

/// The command name was not found in the command table.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("command not found: `{}`", name),
    labels = ["check the supported commands"],
    help = if suggestions.is_empty() {
        format!("type {} for a list of commands", "coms".fg(EXPR))
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` command?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these commands? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct CommandNotFound {
    /// The name that was typed.
    pub name: String,

    /// Commands with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// An argument was given to a command that takes none.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many arguments inputted",
    labels = ["this argument"],
    help = format!("the `{}` command takes no arguments", (&name).fg(EXPR)),
)]
pub struct TooManyArguments {
    /// The name of the command.
    pub name: String,
}

/// A command that takes an argument was given none.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too few arguments inputted",
    labels = ["this command"],
    help = format!("type {} {}", (&name).fg(EXPR), "<expression>".fg(EXPR)),
)]
pub struct TooFewArguments {
    /// The name of the command.
    pub name: String,
}

/// What the command loop should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the next command.
    Continue,

    /// Stop reading commands.
    Close,
}

/// The function that runs a command. It receives the session, the command's argument (empty for
/// commands that take none), and the output to write to.
pub type Handler = fn(&Session, &str, &mut dyn Write) -> Result<Action, ReplError>;

/// A command that can be typed at the prompt.
#[derive(Clone, Copy)]
pub struct Command {
    /// The name that invokes the command.
    pub name: &'static str,

    /// A short description, listed by `coms`.
    pub description: &'static str,

    /// The number of arguments the command takes: zero, or one (the rest of the line).
    pub arity: usize,

    /// The function that runs the command.
    pub handler: Handler,
}

/// The table of commands the command loop dispatches to. Commands keep the order in which they
/// were added, which is the order `coms` lists them in.
#[derive(Clone, Default)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the standard commands: `close`, `coms`, `ops` and `solve`.
    pub fn standard() -> Self {
        Self::new()
            .with(Command {
                name: "close",
                description: "closes this application",
                arity: 0,
                handler: close,
            })
            .with(Command {
                name: "coms",
                description: "displays this command list",
                arity: 0,
                handler: list_commands,
            })
            .with(Command {
                name: "ops",
                description: "displays a list of supported operations",
                arity: 0,
                handler: list_operations,
            })
            .with(Command {
                name: "solve",
                description: "solves the following algebraic expression",
                arity: 1,
                handler: solve,
            })
    }

    /// Adds a command to the table, replacing any command with the same name.
    pub fn with(mut self, command: Command) -> Self {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
        self
    }

    /// Returns the command with the given name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Returns an iterator over the commands, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Returns the names of all commands with a name similar to the given name.
    pub fn similar(&self, name: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| levenshtein(c.name, name) <= 2)
            .map(|c| c.name)
            .collect()
    }

    /// Splits the command line into a command and its argument, checking that the command exists
    /// and that it is given the right number of arguments.
    ///
    /// The command name is the first word of the line. Everything after it, with surrounding
    /// whitespace removed, is a single argument.
    pub fn validate<'line>(&self, line: &'line str) -> Result<(&Command, &'line str), Error> {
        let invocation = Invocation::new(line);

        let Some(command) = self.get(invocation.name) else {
            return Err(Error::new(vec![invocation.name_span], CommandNotFound {
                name: invocation.name.to_string(),
                suggestions: self.similar(invocation.name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }));
        };

        let given = usize::from(!invocation.argument.is_empty());
        if given > command.arity {
            return Err(Error::new(
                vec![invocation.argument_span],
                TooManyArguments { name: command.name.to_string() },
            ));
        }
        if given < command.arity {
            return Err(Error::new(
                vec![invocation.name_span],
                TooFewArguments { name: command.name.to_string() },
            ));
        }

        Ok((command, invocation.argument))
    }
}

/// A command line split into its first word and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation<'line> {
    name: &'line str,
    name_span: Range<usize>,
    argument: &'line str,
    argument_span: Range<usize>,
}

impl<'line> Invocation<'line> {
    fn new(line: &'line str) -> Self {
        let start = line.len() - line.trim_start().len();
        let trimmed = line.trim();

        let name_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let name = &trimmed[..name_end];
        let rest = &trimmed[name_end..];
        let argument = rest.trim_start();
        let argument_start = start + name_end + (rest.len() - argument.len());

        Self {
            name,
            name_span: start..start + name.len(),
            argument,
            argument_span: argument_start..argument_start + argument.len(),
        }
    }
}

/// The state every command runs against.
pub struct Session<'a> {
    /// The commands that can be run.
    pub commands: &'a CommandTable,

    /// The operators expressions are identified with.
    pub operators: &'a OperatorTable,
}

impl Session<'_> {
    /// Validates and runs a command line, writing the command's output to `out`.
    pub fn execute(&self, line: &str, out: &mut dyn Write) -> Result<Action, ReplError> {
        let (command, argument) = self.commands.validate(line).map_err(ReplError::Command)?;
        debug!(command = command.name, argument, "executing command");
        writeln!(out, "|executing {}({})...", command.name, argument)?;
        (command.handler)(self, argument, out)
    }
}

/// Closes the application.
fn close(_: &Session, _: &str, out: &mut dyn Write) -> Result<Action, ReplError> {
    writeln!(out, "{}", GOODBYE)?;
    Ok(Action::Close)
}

/// Lists the commands in the session.
pub fn list_commands(session: &Session, _: &str, out: &mut dyn Write) -> Result<Action, ReplError> {
    writeln!(out, "\nCommands:")?;
    for command in session.commands.iter() {
        writeln!(out, "{} : {}", command.name, command.description)?;
    }
    Ok(Action::Continue)
}

/// Lists the operators in the session.
fn list_operations(session: &Session, _: &str, out: &mut dyn Write) -> Result<Action, ReplError> {
    writeln!(out, "\nSupported operations:")?;
    for operator in session.operators.iter() {
        writeln!(out, "{} : {}", operator.symbol, operator.label)?;
    }
    Ok(Action::Continue)
}

/// Identifies the given expression and reports what was found.
///
/// Solving the identified expression is not supported yet; the command stops after identifying
/// it.
fn solve(session: &Session, argument: &str, out: &mut dyn Write) -> Result<Action, ReplError> {
    let identified = identify(argument, session.operators)
        .map_err(|error| ReplError::Expression { input: argument.to_string(), error })?;

    writeln!(out, "|identified parts: {} ...", identified.parts.join(" , "))?;
    writeln!(out, "|identified variables: {} ...", identified.symbols.join(" , "))?;
    writeln!(out, "|identification successful: {} ...", identified.node)?;
    Ok(Action::Continue)
}
