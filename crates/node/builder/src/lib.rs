//! Type-state composition root for the beacon light client.
//!
//! This crate turns resolved [`ClientOptions`](beacon_node_core::config::ClientOptions)
//! into the configuration of every subsystem and hands back a handle that
//! lives until shutdown.
//!
//! # Example
//!
//! ```ignore
//! use beacon_node_builder::NodeBuilder;
//!
//! let handle = NodeBuilder::new()
//!     .with_options(options)
//!     .with_logger_factory(LoggerFactory::new(level))
//!     .launch()?;
//!
//! handle.wait_for_shutdown().await;
//! ```

mod builder;
mod components;
mod error;
mod handle;
mod shutdown;

pub use builder::*;
pub use components::*;
pub use error::LaunchError;
pub use handle::*;
pub use shutdown::{Shutdown, ShutdownTrigger, shutdown_channel};
