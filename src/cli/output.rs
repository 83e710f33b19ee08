use super::Verbosity;

pub struct OutputConfig {
    pub verbose: bool,
    pub quiet: bool,
}

impl OutputConfig {
    pub fn from_flags(flags: Verbosity) -> Self {
        Self {
            verbose: flags.verbose,
            quiet: flags.quiet,
        }
    }

    /// Set up `env_logger` for library diagnostics on stderr.
    ///
    /// `RUST_LOG` still wins over the level picked from the flags.
    pub fn init_logging(&self) {
        let level = if self.verbose { "debug" } else { "warn" };
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp(None)
            .try_init();
    }

    /// Print a status/confirmation message (suppressed in quiet mode).
    pub fn status(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Print extra detail (only shown in verbose mode, suppressed in quiet mode).
    pub fn detail(&self, msg: &str) {
        if self.verbose && !self.quiet {
            println!("{msg}");
        }
    }
}
