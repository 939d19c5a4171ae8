//! Log verbosity and subscriber setup.

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};
use crate::error::ConfigError;


/// How much the run reports, `Debug` additionally shows the sample histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    pub fn from_str(string: &str) -> Result<Verbosity, ConfigError> {
        let output = match string.to_ascii_lowercase().as_str() {
            "info" => Verbosity::Info,
            "debug" => Verbosity::Debug,
            _ => { return Err(ConfigError::UnknownVerbosity(String::from(string))); },
        };

        Ok(output)
    }

    pub fn level(&self) -> Level {
        match self {
            Verbosity::Info => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        }
    }

    /// Filter letting through events at this level and above
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::new(self.level().to_string().to_ascii_lowercase())
    }

    /// Whether this is the most detailed level
    pub fn is_detailed(&self) -> bool {
        matches!(self, Verbosity::Debug)
    }
}

/// Builds a formatting subscriber that writes events passing `filter` to `writer`
pub fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_level(true)
        .finish()
}

/// Installs the global subscriber at the given verbosity writing to standard error,
/// `RUST_LOG` still takes precedence
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| verbosity.filter());

    build_subscriber(filter, std::io::stderr).init();
}
