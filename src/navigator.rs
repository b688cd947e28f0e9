use std::convert::Infallible;
use std::env;

use crate::env::Environment;
use crate::error::DirhopError;
use crate::flags::Flags;
use crate::highlight::MessageStyler;
use crate::history::History;
use crate::path::TargetResolver;
use crate::process::ShellLauncher;

pub struct Navigator {
    flags: Flags,
    environment: Environment,
    history: History,
    styler: MessageStyler,
}

impl Navigator {
    pub fn new(flags: Flags) -> Self {
        Self::with_environment(flags, Environment::from_process())
    }

    pub fn with_environment(flags: Flags, environment: Environment) -> Self {
        let styler = MessageStyler::new();

        // History trouble never stops navigation; a bad log degrades to
        // an empty one
        let history = match environment.history_file() {
            Some(path) => match History::load(path.clone()) {
                Ok(history) => history,
                Err(e) => {
                    if !flags.is_set("quiet") {
                        eprintln!("{}", styler.warning(&format!("Warning: {}", e)));
                    }
                    History::empty(path)
                }
            },
            None => History::detached(),
        };

        Navigator {
            flags,
            environment,
            history,
            styler,
        }
    }

    /// Resolve, change directory, hand the process over to the shell.
    /// Returns only on failure; the `Infallible` success type marks the
    /// one-way transfer of control.
    pub fn run(mut self) -> Result<Infallible, DirhopError> {
        let quiet = self.flags.is_set("quiet");

        let mut resolver = TargetResolver::new(&self.environment, &mut self.history, quiet);
        let target = resolver.resolve(self.flags.target())?;

        env::set_current_dir(&target).map_err(|source| DirhopError::ChangeDir {
            path: target.clone(),
            source,
        })?;

        if !quiet {
            println!(
                "{}",
                self.styler
                    .notice(&format!("Changed directory to {}", target.display()))
            );
        }

        let launcher = ShellLauncher::from_env(&self.environment);
        Err(DirhopError::Launch(launcher.launch()))
    }
}
