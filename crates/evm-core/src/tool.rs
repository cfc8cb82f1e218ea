use std::path::{Path, PathBuf};
use std::process::Command;

use evm_error::{Result, VersionManagerError};

/// An invocation of one of the managed application's own executables.
/// Building the invocation is separate from running it so tests can inspect
/// the path and arguments without spawning anything.
#[derive(Debug)]
pub struct ExternalTool {
    path: PathBuf,
    args: Vec<String>,
}

impl ExternalTool {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn ensure_executable(&self) -> Result<()> {
        if self.path.is_file() && is_executable(&self.path) {
            return Ok(());
        }
        Err(VersionManagerError::ToolNotFound(
            self.path.display().to_string(),
        ))
    }

    /// Runs the tool in the foreground with inherited stdio, blocking until
    /// it exits, and returns its exit code. The child owns the terminal for
    /// its lifetime.
    pub fn run_foreground(&self) -> Result<i32> {
        let status = Command::new(&self.path).args(&self.args).status()?;
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(target_family = "unix")]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(target_family = "windows")]
fn is_executable(_path: &Path) -> bool {
    true
}
