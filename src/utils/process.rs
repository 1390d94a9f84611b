use crate::result::{BootstrapError, Result};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output, Stdio};
use tokio::process::Command;
use which::which;

/** Spawns the external tools a bootstrap run drives
 *
 * Every command gets an explicit working directory; the process-wide
 * current directory is never changed.
 */
#[derive(Default)]
pub struct ProcessManager;

impl ProcessManager {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a program name on `PATH`. Paths containing a separator are
    /// checked as given.
    pub fn find_executable(&self, name: &str) -> Result<PathBuf> {
        which(name)
            .map_err(|_| BootstrapError::not_found(format!("Executable not found: {}", name)))
    }

    /** Runs a command to completion with captured output
     *
     * stdin is closed so the child can never block waiting on the terminal.
     * The caller decides what a non-zero exit means.
     */
    pub async fn run_captured(&self, program: &str, args: &[String], cwd: &Path) -> Result<Output> {
        let executable = self.find_executable(program)?;
        log::info!("Running {} {:?} in {}", program, args, cwd.display());

        Command::new(&executable)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| BootstrapError::process(format!("Failed to start {}: {}", program, e)))
    }

    /// Runs a command attached to the user's terminal and waits for it.
    pub async fn run_interactive(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<ExitStatus> {
        let executable = self.find_executable(program)?;
        log::info!("Running {} {:?} in {}", program, args, cwd.display());

        let mut child = Command::new(&executable)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| BootstrapError::process(format!("Failed to start {}: {}", program, e)))?;

        child
            .wait()
            .await
            .map_err(|e| BootstrapError::process(format!("Failed to wait for {}: {}", program, e)))
    }
}
