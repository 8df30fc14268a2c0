use alg_error::Error;
use std::io;

/// Utility enum to package the errors that can occur while executing a command line.
#[derive(Debug)]
pub enum ReplError {
    /// The command line itself is invalid. The spans point into the command line.
    Command(Error),

    /// The expression given to a command could not be identified. The spans point into the
    /// expression.
    Expression {
        /// The expression that was given.
        input: String,

        /// The error that occurred.
        error: Error,
    },

    /// Output could not be written.
    Io(io::Error),
}

impl ReplError {
    /// Report this error to stderr. `line` is the command line that produced it.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Command(err) => err.report_to_stderr("command", line),
            Self::Expression { input, error } => error.report_to_stderr("expression", input),
            Self::Io(err) => {
                eprintln!("{}", err);
                Ok(())
            },
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
