//! Beacon network presets
//!
//! Answers "which network am I following?" for the light client: the network
//! selector, the size class of its protocol structures, and the genesis data
//! a known network is anchored to.
//!
//! # Core Types
//!
//! - [`NetworkType`] - Mainnet, Holesky or a custom network
//! - [`SizePreset`] - Minimal or mainnet structure sizes
//! - [`NetworkPreset`] - Static genesis data of a known network
//!
//! # Example
//!
//! ```ignore
//! use beacon_network_spec::{NetworkPreset, NetworkType};
//!
//! let preset = NetworkPreset::for_network(NetworkType::Mainnet).unwrap();
//! assert_eq!(preset.genesis_time, 1606824023);
//! ```

mod constants;
mod network;
mod preset;

pub use constants::*;
pub use network::{NetworkType, SizePreset};
pub use preset::{NetworkPreset, PresetTable, presets};

// Re-export the root type so downstream crates agree on it.
pub use alloy_primitives::B256;
