use crate::commands::clone::ClonedRepository;
use crate::result::{BootstrapError, Result};
use crate::utils::ProcessManager;

/// Runs `npx turbo link` inside the clone, attached to the terminal.
pub struct CacheLinker {
    program: String,
    args: Vec<String>,
    process: ProcessManager,
}

impl Default for CacheLinker {
    fn default() -> Self {
        Self::with_command("npx", ["turbo", "link"])
    }
}

impl CacheLinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            process: ProcessManager::new(),
        }
    }

    /// Only the exit status is inspected; linking itself is left to turbo.
    pub async fn link(&self, clone: &ClonedRepository) -> Result<()> {
        println!("Running {} {}...", self.program, self.args.join(" "));

        let status = self
            .process
            .run_interactive(&self.program, &self.args, &clone.path)
            .await?;

        if !status.success() {
            log::error!("{} exited with {}", self.program, status);
            return Err(BootstrapError::process(BootstrapError::LINK_FAILED));
        }

        println!("Successfully linked turbo repository");
        log::info!("Linked {} to turbo remote cache", clone.path.display());

        Ok(())
    }
}
