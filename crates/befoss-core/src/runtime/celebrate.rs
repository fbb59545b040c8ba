//! Best-effort celebration once the wizard is done
//!
//! Runs an external command (`confetti` by default). A missing or failing command is
//! reported, never fatal.

use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// How long the celebration may run before it is killed
const CELEBRATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to find the default celebration command
pub const CONFETTI_URL: &str = "https://github.com/masalani/confetti";

/// What happened when the celebration was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CelebrationOutcome {
    Celebrated,
    /// The command could not be started (usually not installed)
    Missing,
    /// The command ran but exited unsuccessfully
    Failed(Option<i32>),
    TimedOut,
}

/// External command run after a successful wizard
#[derive(Debug, Clone)]
pub struct Celebration {
    program: String,
    args: Vec<String>,
}

impl Celebration {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// The `confetti` command
    pub fn confetti() -> Self {
        Self::new("confetti")
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command and wait for it, bounded by a timeout
    pub async fn launch(&self) -> CelebrationOutcome {
        let mut child = match TokioCommand::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(_) => return CelebrationOutcome::Missing,
        };

        match timeout(CELEBRATION_TIMEOUT, child.wait()).await {
            Ok(Ok(status)) if status.success() => CelebrationOutcome::Celebrated,
            Ok(Ok(status)) => CelebrationOutcome::Failed(status.code()),
            Ok(Err(_)) => CelebrationOutcome::Failed(None),
            Err(_) => {
                let _ = child.kill().await;
                CelebrationOutcome::TimedOut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_command_is_reported() {
        let outcome = Celebration::new("befoss-no-such-confetti-command")
            .launch()
            .await;
        assert_eq!(outcome, CelebrationOutcome::Missing);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command_celebrates() {
        let outcome = Celebration::new("true").launch().await;
        assert_eq!(outcome, CelebrationOutcome::Celebrated);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_keeps_exit_code() {
        let outcome = Celebration::new("sh").arg("-c").arg("exit 3").launch().await;
        assert_eq!(outcome, CelebrationOutcome::Failed(Some(3)));
    }
}
