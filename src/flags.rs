use crate::error::DirhopError;
use std::collections::HashMap;

pub const USAGE: &str = "Usage: dirhop [OPTIONS] [DIRECTORY-OR-KEY]";

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    target: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress warnings and notices".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            target: None,
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), DirhopError> {
        for arg in args {
            if let Some(name) = self.match_flag(arg) {
                if let Some(flag) = self.flags.get_mut(&name) {
                    flag.value = Some("true".to_string());
                }
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(DirhopError::FlagError(format!("unknown flag: {}", arg)));
            } else if self.target.is_none() {
                // Only the first positional argument names the target
                self.target = Some(arg.clone());
            }
        }
        Ok(())
    }

    fn match_flag(&self, arg: &str) -> Option<String> {
        self.flags
            .iter()
            .find(|(_, flag)| arg == flag.short || arg == flag.long)
            .map(|(name, _)| name.clone())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn print_help(&self) {
        println!("{}", USAGE);
        println!("\nRemembers directories by short keys and starts a shell there.");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
