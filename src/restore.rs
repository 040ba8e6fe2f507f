use crate::error::{Result, SetupError};
use crate::layout::{RESTORE_ARGS, RESTORE_PROGRAM};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A run-ready description of the restore tool invocation (testable without executing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreCommand {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed to the executable.
    pub args: Vec<OsString>,
    /// Working directory for the process.
    pub cwd: PathBuf,
}

impl RestoreCommand {
    /// `dotnet tool restore` inside `plugin_dir`.
    pub fn dotnet(plugin_dir: impl Into<PathBuf>) -> Self {
        Self::new(RESTORE_PROGRAM, RESTORE_ARGS, plugin_dir)
    }

    /// Arbitrary program with arguments inside `cwd`.
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(|a| a.as_ref().to_os_string()).collect(),
            cwd: cwd.into(),
        }
    }

    /// Working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run the tool to completion with inherited stdio.
    ///
    /// A missing working directory, a spawn failure or a non-zero exit status is an error.
    pub fn run(&self) -> Result<()> {
        if !self.cwd.is_dir() {
            return Err(SetupError::Spawn {
                message: format!("working directory does not exist: {}", self.cwd.display()),
            });
        }

        tracing::info!(
            program = %self.program.display(),
            cwd = %self.cwd.display(),
            "running restore tool"
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| SetupError::Spawn {
                message: format!("{}: {e}", self.program.display()),
            })?;

        if !status.success() {
            return Err(SetupError::RestoreStatus { status });
        }
        Ok(())
    }
}
