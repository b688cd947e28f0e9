use std::io;
use std::path::PathBuf;

use crate::path::ResolveError;
use crate::process::LaunchError;

#[derive(Debug)]
pub enum DirhopError {
    Resolve(ResolveError),
    ChangeDir { path: PathBuf, source: io::Error },
    Launch(LaunchError),
    FlagError(String),
}

impl From<ResolveError> for DirhopError {
    fn from(err: ResolveError) -> Self {
        DirhopError::Resolve(err)
    }
}

impl From<LaunchError> for DirhopError {
    fn from(err: LaunchError) -> Self {
        DirhopError::Launch(err)
    }
}

impl std::fmt::Display for DirhopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirhopError::Resolve(e) => write!(f, "{}", e),
            DirhopError::ChangeDir { path, source } => write!(
                f,
                "Failed to change directory to '{}': {}",
                path.display(),
                source
            ),
            DirhopError::Launch(e) => write!(f, "{}", e),
            DirhopError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for DirhopError {}
