mod resolver;

pub use resolver::TargetResolver;

use std::io;

#[derive(Debug)]
pub enum ResolveError {
    Canonicalize { path: String, source: io::Error },
    NoTargetNoHome,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Canonicalize { path, source } => {
                write!(f, "Failed to resolve directory '{}': {}", path, source)
            }
            ResolveError::NoTargetNoHome => {
                write!(f, "target directory not provided and HOME is unset")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
