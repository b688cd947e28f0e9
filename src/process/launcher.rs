use std::os::unix::process::CommandExt;
use std::process::Command;

use super::LaunchError;
use crate::env::Environment;

pub struct ShellLauncher {
    shell: String,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn from_env(environment: &Environment) -> Self {
        Self::new(environment.shell())
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Replaces the current process image with the shell. On success this
    /// never returns, which is why the signature yields the error
    /// directly rather than a `Result`.
    pub fn launch(&self) -> LaunchError {
        let source = Command::new(&self.shell).exec();
        LaunchError::Exec {
            shell: self.shell.clone(),
            source,
        }
    }
}
