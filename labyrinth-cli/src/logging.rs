//! Logging to stderr.

use anyhow::Context as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, Default, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Additional logging to stderr, including a drawing of every step of maze carving.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Remove timestamps from logs so that they are deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub(crate) simplify_log_format: bool,
}

impl LoggingArgs {
    /// The most verbose level that will be written.
    #[must_use]
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        }
    }

    fn config(&self) -> simplelog::Config {
        use log::LevelFilter::{Error, Off};

        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_thread_level(Off)
            .set_time_level(if self.simplify_log_format { Off } else { Error })
            .build()
    }
}

/// Install a [`log`] global logger, writing to stderr, based on user-provided `options`.
///
/// Returns an error if a logger was already installed.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    let max_level = options.level();
    let logger = simplelog::WriteLogger::new(max_level, options.config(), std::io::stderr());

    log::set_boxed_logger(logger).context("failed to initialize logging")?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(LoggingArgs::default().level(), log::LevelFilter::Warn);
    }

    #[test]
    fn verbose_is_trace() {
        let options = LoggingArgs {
            verbose: true,
            simplify_log_format: false,
        };
        assert_eq!(options.level(), log::LevelFilter::Trace);
    }
}
