mod launcher;

pub use launcher::ShellLauncher;

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LaunchError {
    Exec { shell: String, source: io::Error },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Exec { shell, source } => {
                write!(f, "Failed to start shell '{}': {}", shell, source)
            }
        }
    }
}

impl std::error::Error for LaunchError {}
