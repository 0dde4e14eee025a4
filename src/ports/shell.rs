//! Command runner port for invoking the orchestration tool.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// An external command as an explicit argument vector.
///
/// Commands are always spawned directly from the vector, never through a
/// shell, so operator-supplied filenames, groups, and service names cannot
/// splice extra arguments or shell syntax into the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: String,
    /// Arguments passed to the program verbatim.
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation of `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Invocation {
    /// Space-joined rendering for log lines; not shell-safe quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The captured result of one command run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Process exit code. Non-zero is an ordinary outcome here: the
    /// orchestration tool exits non-zero whenever any host fails.
    pub exit_code: i32,
    /// Captured standard output. Standard error is discarded.
    pub stdout: String,
}

/// Why a command produced no output at all.
#[derive(Debug, Error)]
pub enum RunError {
    /// The process could not be started or could not be awaited.
    #[error("failed to start {program}: {message}")]
    Launch {
        /// Program that failed to launch.
        program: String,
        /// Underlying cause.
        message: String,
    },
    /// The process outlived its time budget.
    #[error("command did not finish within {}s", .limit.as_secs())]
    Timeout {
        /// The budget that was exceeded.
        limit: Duration,
    },
}

/// Runs external commands.
///
/// Abstracting execution keeps the use cases testable without spawning
/// processes: tests substitute a runner that returns canned console text.
pub trait CommandRunner: Send + Sync {
    /// Runs the command and captures its standard output.
    ///
    /// A non-zero exit is reported through [`RunOutput::exit_code`], never
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the process cannot be started or does not
    /// finish within `timeout`.
    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput, RunError>;
}
