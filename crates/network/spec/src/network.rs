//! Network selectors and size classes.

use clap::ValueEnum;

/// The beacon network a client follows.
///
/// Known networks carry a static [`NetworkPreset`](crate::NetworkPreset);
/// [`NetworkType::Custom`] has none and needs its genesis data supplied by
/// the operator.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum NetworkType {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// The Holesky testnet.
    Holesky,
    /// A network whose genesis data is given on the command line.
    Custom,
}

impl NetworkType {
    /// Parse a network name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Whether genesis data for this network comes from the static preset table.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom)
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Size class governing the serialized structure sizes of the protocol.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum SizePreset {
    /// Reduced sizes used by local and test networks.
    Minimal,
    /// Full production sizes.
    #[default]
    Mainnet,
}

impl SizePreset {
    /// Resolve a preset by name, ignoring ASCII case.
    ///
    /// Network names map to the size class that network runs with, so
    /// `mainnet` and `holesky` select [`SizePreset::Mainnet`] and `custom`
    /// selects [`SizePreset::Minimal`]. The size class names themselves are
    /// accepted too.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(network) = NetworkType::from_name(name) {
            return Some(Self::for_network(network));
        }
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// The size class a network runs with.
    pub fn for_network(network: NetworkType) -> Self {
        match crate::NetworkPreset::for_network(network) {
            Some(preset) => preset.size_preset,
            None => Self::Minimal,
        }
    }
}
