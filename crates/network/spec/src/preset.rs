//! Static preset table.
//!
//! The table is built once, on first use, and never changes afterwards.
//! Lookups hand out `&'static` references into it.

use std::sync::OnceLock;

use alloy_primitives::B256;

use crate::{
    NetworkType, SizePreset,
    constants::{holesky, mainnet},
};

/// Genesis data and size class of a known network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPreset {
    /// Which network this preset describes.
    pub network: NetworkType,
    /// Network name.
    pub name: &'static str,
    /// UNIX time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator set.
    pub genesis_validators_root: B256,
    /// Size class of the protocol structures.
    pub size_preset: SizePreset,
    /// Discovery bootstrap records.
    pub bootstrap_enrs: &'static [&'static str],
}

impl NetworkPreset {
    /// Look up the preset of a network.
    ///
    /// Returns `None` for [`NetworkType::Custom`].
    pub fn for_network(network: NetworkType) -> Option<&'static Self> {
        presets().get(network)
    }
}

/// Immutable mapping from [`NetworkType`] to [`NetworkPreset`].
#[derive(Debug)]
pub struct PresetTable {
    entries: [NetworkPreset; 2],
}

impl PresetTable {
    fn new() -> Self {
        Self {
            entries: [
                NetworkPreset {
                    network: NetworkType::Mainnet,
                    name: mainnet::NETWORK_NAME,
                    genesis_time: mainnet::GENESIS_TIME,
                    genesis_validators_root: mainnet::GENESIS_VALIDATORS_ROOT,
                    size_preset: SizePreset::Mainnet,
                    bootstrap_enrs: mainnet::BOOTSTRAP_ENRS,
                },
                NetworkPreset {
                    network: NetworkType::Holesky,
                    name: holesky::NETWORK_NAME,
                    genesis_time: holesky::GENESIS_TIME,
                    genesis_validators_root: holesky::GENESIS_VALIDATORS_ROOT,
                    size_preset: SizePreset::Mainnet,
                    bootstrap_enrs: holesky::BOOTSTRAP_ENRS,
                },
            ],
        }
    }

    /// Preset for `network`, if it has one.
    pub fn get(&self, network: NetworkType) -> Option<&NetworkPreset> {
        self.entries.iter().find(|preset| preset.network == network)
    }

    /// All presets in the table.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkPreset> {
        self.entries.iter()
    }
}

static PRESETS: OnceLock<PresetTable> = OnceLock::new();

/// The process-wide preset table.
pub fn presets() -> &'static PresetTable {
    PRESETS.get_or_init(|| {
        tracing::trace!("Initializing network preset table");
        PresetTable::new()
    })
}
