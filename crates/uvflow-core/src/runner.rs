//! Subprocess execution of a translated plan.
//!
//! Commands run in order in the project root with inherited stdio, so the
//! external tool's own progress output reaches the terminal unchanged. Under
//! [`ChildStdout::Stderr`] the child's stdout is moved to stderr instead. The
//! first failure stops the plan.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, UvflowError};
use crate::translate::{CommandLine, Translation};

/// Locate `program` on `PATH`.
pub fn locate(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|_| UvflowError::ToolNotFound(program.to_string()))
}

/// Where a spawned command's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildStdout {
    #[default]
    Inherit,
    /// Send it to our stderr, keeping our stdout free for machine-readable output.
    Stderr,
}

impl ChildStdout {
    fn stdio(self) -> Stdio {
        match self {
            ChildStdout::Inherit => Stdio::inherit(),
            ChildStdout::Stderr => Stdio::from(std::io::stderr()),
        }
    }
}

/// Run one command line in `root`, waiting for it to exit.
pub fn run_command(command: &CommandLine, root: &Path, stdout: ChildStdout) -> Result<()> {
    let program = locate(&command.program)?;
    tracing::info!(command = %command, "running");

    let status = Command::new(&program)
        .args(&command.args)
        .current_dir(root)
        .stdout(stdout.stdio())
        .status()?;

    if !status.success() {
        let status = match status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        return Err(UvflowError::CommandFailed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

/// Run every command of `plan` in order, stopping at the first failure.
///
/// Every program is located before anything runs, so a missing tool never
/// leaves the project half-initialized.
pub fn run_plan(plan: &Translation, root: &Path, stdout: ChildStdout) -> Result<()> {
    for command in &plan.commands {
        locate(&command.program)?;
    }
    for command in &plan.commands {
        run_command(command, root, stdout)?;
    }
    Ok(())
}
