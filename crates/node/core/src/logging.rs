//! Logging configuration for the beacon light client.
//!
//! [`init_logging`] installs the global subscriber once per process.
//! [`LoggerFactory`] is the handle passed to every subsystem so each one gets
//! its own component span and minimum level.

use clap::ValueEnum;
use eyre::{Result, eyre};
use tracing::{Level, Span, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

/// Timestamp prefix of every log line.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Minimum severity of log output, as given by `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-message protocol traces.
    Trace,
    /// Debugging output.
    Debug,
    /// Normal operational output.
    #[default]
    #[value(alias = "information")]
    Info,
    /// Warnings and errors.
    #[value(alias = "warning")]
    Warn,
    /// Errors only.
    Error,
    /// Errors only (alias of `error`).
    Critical,
    /// No output.
    #[value(alias = "none")]
    Off,
}

impl LogLevel {
    /// Parse a level name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// The tracing filter this level maps to.
    pub const fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
            Self::Off => LevelFilter::OFF,
        }
    }
}

/// Install the global log subscriber.
///
/// The filter starts at `level`; directives from `RUST_LOG`, when set, are
/// layered on top so individual targets can still be tuned.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_owned()))
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

/// Shared handle subsystems use to create their loggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerFactory {
    level: LevelFilter,
}

impl LoggerFactory {
    /// Factory whose loggers emit at `level` and above.
    pub const fn new(level: LogLevel) -> Self {
        Self { level: level.as_level_filter() }
    }

    /// Factory whose loggers emit nothing.
    pub const fn silenced() -> Self {
        Self { level: LevelFilter::OFF }
    }

    /// Minimum level of loggers created by this factory.
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    /// Create the logger of one subsystem.
    pub fn create_logger(&self, component: &'static str) -> ComponentLogger {
        let span = if self.level == LevelFilter::OFF {
            Span::none()
        } else {
            tracing::info_span!("component", name = component)
        };
        ComponentLogger { component, level: self.level, span }
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

/// Logger handed to a single subsystem.
#[derive(Debug, Clone)]
pub struct ComponentLogger {
    component: &'static str,
    level: LevelFilter,
    span: Span,
}

impl ComponentLogger {
    /// Name of the subsystem.
    pub const fn component(&self) -> &'static str {
        self.component
    }

    /// Whether events at `level` should be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Span to enter around the subsystem's work.
    pub const fn span(&self) -> &Span {
        &self.span
    }
}
