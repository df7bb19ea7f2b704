//! Command-line configuration for the beacon light client.
//!
//! This crate turns raw command-line tokens into a validated, network-aware
//! [`ClientOptions`](config::ClientOptions):
//! - [`args`] - Network resolution, flag binding and validation
//! - [`config`] - Resolved client and sync options
//! - [`usage`] - Usage listing
//! - [`logging`] - Logging initialization and the shared logger factory
//! - [`dirs`] - Default data directory
//! - [`version`] - Version information
//!
//! For assembling the client from the resolved options, see
//! `beacon-node-builder`.

pub mod args;
pub mod config;
pub mod constants;
pub mod dirs;
pub mod logging;
pub mod usage;
pub mod version;
