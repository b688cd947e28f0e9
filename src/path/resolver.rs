use std::fs;
use std::path::PathBuf;

use super::ResolveError;
use crate::env::Environment;
use crate::highlight::MessageStyler;
use crate::history::History;

pub struct TargetResolver<'a> {
    environment: &'a Environment,
    history: &'a mut History,
    quiet: bool,
    styler: MessageStyler,
}

impl<'a> TargetResolver<'a> {
    pub fn new(environment: &'a Environment, history: &'a mut History, quiet: bool) -> Self {
        Self {
            environment,
            history,
            quiet,
            styler: MessageStyler::new(),
        }
    }

    /// Resolution order: remembered key first, then the filesystem, and
    /// the home directory when no target was given at all.
    pub fn resolve(&mut self, target: Option<&str>) -> Result<PathBuf, ResolveError> {
        match target {
            Some(arg) if !arg.is_empty() => self.resolve_argument(arg),
            _ => self.home_fallback(),
        }
    }

    fn resolve_argument(&mut self, arg: &str) -> Result<PathBuf, ResolveError> {
        if let Some(saved) = self.history.lookup(arg) {
            return Ok(PathBuf::from(saved));
        }

        // Unknown key: the argument must name an existing directory
        let resolved = fs::canonicalize(arg).map_err(|e| ResolveError::Canonicalize {
            path: arg.to_string(),
            source: e,
        })?;

        let resolved_str = resolved.to_string_lossy();
        if let Err(e) = self.history.remember_aliases(arg, &resolved_str) {
            if !self.quiet {
                eprintln!("{}", self.styler.warning(&format!("Warning: {}", e)));
            }
        }

        Ok(resolved)
    }

    fn home_fallback(&self) -> Result<PathBuf, ResolveError> {
        self.environment.home_dir().ok_or(ResolveError::NoTargetNoHome)
    }
}
