//! Client builder type-state pattern.
//!
//! Each stage is a distinct type:
//!
//! ```text
//! NodeBuilder
//!   │
//!   ├── with_options(options)
//!   ▼
//! WithOptions
//!   │
//!   ├── with_logger_factory(factory)   (optional)
//!   ▼
//! WithLoggerFactory
//!   │
//!   ├── launch()
//!   ▼
//! NodeHandle
//! ```

use std::fs;

use beacon_node_core::{config::ClientOptions, logging::LoggerFactory, version::CLIENT_VERSION};
use tracing::info;

use crate::{ClientComponents, LaunchError, NodeHandle, shutdown_channel};

/// Client builder - first stage.
///
/// Use [`with_options`](Self::with_options) to provide the resolved command
/// line.
#[derive(Debug)]
pub struct NodeBuilder;

impl NodeBuilder {
    /// Create a new client builder.
    pub const fn new() -> Self {
        Self
    }

    /// Provide the resolved client options.
    pub fn with_options(self, options: ClientOptions) -> WithOptions {
        WithOptions { options }
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder with client options attached.
#[derive(Debug)]
pub struct WithOptions {
    options: ClientOptions,
}

impl WithOptions {
    /// Get the client options.
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Provide the logger factory shared by every subsystem.
    pub fn with_logger_factory(self, loggers: LoggerFactory) -> WithLoggerFactory {
        WithLoggerFactory { options: self.options, loggers }
    }

    /// Launch with a logger factory at the configured log level.
    pub fn launch(self) -> Result<NodeHandle, LaunchError> {
        let loggers = LoggerFactory::new(self.options.log_level);
        self.with_logger_factory(loggers).launch()
    }
}

/// Builder with options and logging, ready to launch.
#[derive(Debug)]
pub struct WithLoggerFactory {
    options: ClientOptions,
    loggers: LoggerFactory,
}

impl WithLoggerFactory {
    /// Get the client options.
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Launch the client.
    ///
    /// Creates the directory holding the database, derives every subsystem's
    /// configuration and returns a handle owning the shutdown signal.
    pub fn launch(self) -> Result<NodeHandle, LaunchError> {
        let database_path = self.options.database_path();
        if let Some(dir) = database_path.parent() {
            fs::create_dir_all(dir)
                .map_err(|source| LaunchError::DataDir { path: dir.to_path_buf(), source })?;
        }

        info!("Client: {CLIENT_VERSION}");
        info!("Network: {}", self.options.network());
        info!("Data directory: {}", self.options.datadir.display());
        info!("Database: {}", database_path.display());

        let components = ClientComponents::new(&self.options, self.loggers);
        info!(
            tcp_port = components.transport.config.tcp_port,
            http_port = components.transport.config.http_port,
            peers = components.transport.config.target_peer_count,
            discovery = components.discovery.config.enabled,
            "Transport configured"
        );

        let (trigger, shutdown) = shutdown_channel();
        Ok(NodeHandle::new(components, trigger, shutdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use beacon_node_core::{args::parse_args, logging::LogLevel};

    fn options_in(datadir: &std::path::Path) -> ClientOptions {
        let args = vec!["--datadir".to_string(), datadir.display().to_string()];
        parse_args(&args).unwrap()
    }

    #[test]
    fn test_launch_creates_database_dir() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = dir.path().join("nested");

        let handle = NodeBuilder::new().with_options(options_in(&datadir)).launch().unwrap();

        assert!(datadir.join("beacon-lc").is_dir());
        assert_eq!(
            handle.components().sync.config.database_path,
            datadir.join("beacon-lc").join("beacon-lc.db")
        );
    }

    #[test]
    fn test_launch_uses_given_factory() {
        let dir = tempfile::tempdir().unwrap();
        let handle = NodeBuilder::new()
            .with_options(options_in(dir.path()))
            .with_logger_factory(LoggerFactory::new(LogLevel::Trace))
            .launch()
            .unwrap();

        assert_eq!(
            handle.components().transport.loggers,
            LoggerFactory::new(LogLevel::Trace)
        );
    }

    #[test]
    fn test_launch_fails_on_file_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = dir.path().join("taken");
        fs::write(&datadir, b"not a directory").unwrap();

        assert_matches!(
            NodeBuilder::new().with_options(options_in(&datadir)).launch(),
            Err(LaunchError::DataDir { path, .. }) if path == datadir.join("beacon-lc")
        );
    }
}
