use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

const HISTORY_FILE_NAME: &str = ".chdir_history";
const DEFAULT_SHELL: &str = "/bin/bash";

/// Snapshot of the process environment taken at startup. All lookups go
/// through the snapshot, so tests can build a synthetic one with
/// `from_vars` instead of mutating the real process environment.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn from_process() -> Self {
        let mut vars: HashMap<String, String> = env::vars().collect();

        // HOME wins when set; dirs covers login setups that never export it
        if !vars.contains_key("HOME") {
            if let Some(home) = dirs::home_dir() {
                vars.insert("HOME".to_string(), home.to_string_lossy().into_owned());
            }
        }

        Self { vars }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// An empty value counts as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME").map(PathBuf::from)
    }

    pub fn shell(&self) -> String {
        self.get("SHELL").unwrap_or(DEFAULT_SHELL).to_string()
    }

    pub fn history_file(&self) -> Option<PathBuf> {
        self.home_dir().map(|home| home.join(HISTORY_FILE_NAME))
    }
}
