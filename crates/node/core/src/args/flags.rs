//! The recognized command-line flags.

use beacon_network_spec::NetworkType;
use strum::IntoEnumIterator;

use super::coerce::possible_names;

/// Flags a custom network must be given explicitly.
pub const REQUIRED_FOR_CUSTOM: [Flag; 3] =
    [Flag::GenesisTime, Flag::GenesisValidatorsRoot, Flag::Preset];

/// A recognized long-form flag.
///
/// Declaration order is the order of the usage listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
pub enum Flag {
    #[strum(serialize = "--network")]
    Network,
    #[strum(serialize = "--genesis-time")]
    GenesisTime,
    #[strum(serialize = "--genesis-validators-root")]
    GenesisValidatorsRoot,
    #[strum(serialize = "--preset")]
    Preset,
    #[strum(serialize = "--block-root")]
    BlockRoot,
    #[strum(serialize = "--datadir")]
    DataDir,
    #[strum(serialize = "--peer-count")]
    PeerCount,
    #[strum(serialize = "--discovery-peer-count")]
    DiscoveryPeerCount,
    #[strum(serialize = "--dial-parallelism")]
    DialParallelism,
    #[strum(serialize = "--dial-timeout")]
    DialTimeout,
    #[strum(serialize = "--tcp-port")]
    TcpPort,
    #[strum(serialize = "--http-port")]
    HttpPort,
    #[strum(serialize = "--gossip-sub-enabled")]
    GossipSubEnabled,
    #[strum(serialize = "--enable-discovery")]
    EnableDiscovery,
    #[strum(serialize = "--bootnodes")]
    Bootnodes,
    #[strum(serialize = "--log-level")]
    LogLevel,
}

impl Flag {
    /// Look up the flag a token names, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|flag| flag.name().eq_ignore_ascii_case(token))
    }

    /// The flag as typed on the command line, e.g. `--tcp-port`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the flag is only accepted with `--network custom`.
    pub const fn custom_network_only(self) -> bool {
        matches!(self, Self::GenesisTime | Self::GenesisValidatorsRoot | Self::Preset)
    }

    /// Whether the flag takes a list of values rather than exactly one.
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Bootnodes)
    }

    /// Placeholder for the flag's value in the usage listing.
    pub fn value_hint(self) -> String {
        match self {
            Self::Network | Self::Preset => format!("<{}>", possible_names::<NetworkType>()),
            Self::GenesisTime => "<timestamp>".to_owned(),
            Self::GenesisValidatorsRoot | Self::BlockRoot => "<hex>".to_owned(),
            Self::DataDir => "<path>".to_owned(),
            Self::PeerCount | Self::DiscoveryPeerCount | Self::DialParallelism => {
                "<number>".to_owned()
            }
            Self::DialTimeout => "<seconds>".to_owned(),
            Self::TcpPort | Self::HttpPort => "<port>".to_owned(),
            Self::GossipSubEnabled | Self::EnableDiscovery => "<true|false>".to_owned(),
            Self::Bootnodes => "<addr>...".to_owned(),
            Self::LogLevel => "<level>".to_owned(),
        }
    }

    /// Flag and value placeholder, as shown in the usage listing.
    pub fn label(self) -> String {
        format!("{} {}", self.name(), self.value_hint())
    }

    /// What the flag sets.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Network => "Network to follow. Defaults to mainnet.",
            Self::GenesisTime => "Genesis time as a UNIX timestamp of slot 0. Custom network only.",
            Self::GenesisValidatorsRoot => {
                "Trusted genesis validators root in hexadecimal format. Custom network only."
            }
            Self::Preset => "Size preset of the network structures. Custom network only.",
            Self::BlockRoot => "Trusted beacon block root in hexadecimal format.",
            Self::DataDir => "Data directory path. (Optional)",
            Self::PeerCount => "Target number of peer connections. (Optional)",
            Self::DiscoveryPeerCount => "Target number of nodes for discovery to find. (Optional)",
            Self::DialParallelism => "Maximum number of parallel dials. (Optional)",
            Self::DialTimeout => "Dial timeout in seconds. (Optional)",
            Self::TcpPort => "TCP port for libp2p connections. (Optional)",
            Self::HttpPort => "HTTP port of the exposed API. (Optional)",
            Self::GossipSubEnabled => "Enables or disables gossipsub. (Optional)",
            Self::EnableDiscovery => "Enables or disables discovery. (Optional)",
            Self::Bootnodes => "Bootnode libp2p multiaddresses. (Optional)",
            Self::LogLevel => {
                "Log level: trace, debug, info, warn, error, critical or none. (Optional)"
            }
        }
    }
}
