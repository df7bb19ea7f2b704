//! Resolved client configuration.
//!
//! [`ClientOptions`] is what the command line resolves to and what the
//! composition root consumes. It is built once and never mutated afterwards.
//! [`PartialOptions`] is the staged form the argument pipeline fills in: the
//! genesis fields stay optional until validation has run.

use std::{path::PathBuf, time::Duration};

use beacon_network_spec::{B256, NetworkPreset, NetworkType, SizePreset};

use crate::{
    constants::{
        DATABASE_FILE_NAME, DATA_DIR_NAME, DEFAULT_DIAL_TIMEOUT, DEFAULT_HTTP_PORT,
        DEFAULT_MAX_PARALLEL_DIALS, DEFAULT_TARGET_NODES_TO_FIND, DEFAULT_TARGET_PEER_COUNT,
        DEFAULT_TCP_PORT,
    },
    dirs::default_data_dir,
    logging::LogLevel,
};

/// Options of the sync protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncProtocolOptions {
    /// Network being followed.
    pub network: NetworkType,
    /// UNIX time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator set.
    pub genesis_validators_root: B256,
    /// Checkpoint block root sync trust is bootstrapped from.
    pub trusted_block_root: Option<B256>,
    /// Size class of the protocol structures.
    pub preset: SizePreset,
}

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Data directory, as given by the operator.
    pub datadir: PathBuf,
    /// Number of peers to keep connections to.
    pub target_peer_count: usize,
    /// Number of nodes discovery tries to find.
    pub target_nodes_to_find: usize,
    /// Number of dials in flight at once.
    pub max_parallel_dials: usize,
    /// How long a single dial may take.
    pub dial_timeout: Duration,
    /// libp2p TCP port.
    pub tcp_port: u16,
    /// HTTP API port.
    pub http_port: u16,
    /// Whether gossipsub is enabled.
    pub gossip_sub_enabled: bool,
    /// Whether discovery runs at all.
    pub enable_discovery: bool,
    /// Bootnode addresses, in the order given.
    pub bootnodes: Vec<String>,
    /// Minimum severity of log output.
    pub log_level: LogLevel,
    /// Sync protocol options.
    pub sync: SyncProtocolOptions,
}

impl ClientOptions {
    /// Network being followed.
    pub fn network(&self) -> NetworkType {
        self.sync.network
    }

    /// Path of the client database below the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.datadir.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME)
    }

    /// Static preset of the network, if it is a known one.
    pub fn preset(&self) -> Option<&'static NetworkPreset> {
        NetworkPreset::for_network(self.sync.network)
    }
}

/// Client options with genesis data not yet guaranteed.
///
/// Produced by network resolution, filled in by flag binding and turned into
/// [`ClientOptions`] by [`PartialOptions::finish`] once validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialOptions {
    /// See [`ClientOptions::datadir`].
    pub datadir: PathBuf,
    /// See [`ClientOptions::target_peer_count`].
    pub target_peer_count: usize,
    /// See [`ClientOptions::target_nodes_to_find`].
    pub target_nodes_to_find: usize,
    /// See [`ClientOptions::max_parallel_dials`].
    pub max_parallel_dials: usize,
    /// See [`ClientOptions::dial_timeout`].
    pub dial_timeout: Duration,
    /// See [`ClientOptions::tcp_port`].
    pub tcp_port: u16,
    /// See [`ClientOptions::http_port`].
    pub http_port: u16,
    /// See [`ClientOptions::gossip_sub_enabled`].
    pub gossip_sub_enabled: bool,
    /// See [`ClientOptions::enable_discovery`].
    pub enable_discovery: bool,
    /// See [`ClientOptions::bootnodes`].
    pub bootnodes: Vec<String>,
    /// See [`ClientOptions::log_level`].
    pub log_level: LogLevel,
    /// Network being followed.
    pub network: NetworkType,
    /// Genesis time, seeded from the preset or given explicitly.
    pub genesis_time: Option<u64>,
    /// Genesis validators root, seeded from the preset or given explicitly.
    pub genesis_validators_root: Option<B256>,
    /// Size class, seeded from the preset or given explicitly.
    pub preset: Option<SizePreset>,
    /// Trusted checkpoint root.
    pub trusted_block_root: Option<B256>,
}

impl PartialOptions {
    /// Defaults for `network`, with genesis data seeded from its preset.
    ///
    /// A custom network leaves the genesis fields empty.
    pub fn for_network(network: NetworkType) -> Self {
        let preset = NetworkPreset::for_network(network);

        Self {
            datadir: default_data_dir(),
            target_peer_count: DEFAULT_TARGET_PEER_COUNT,
            target_nodes_to_find: DEFAULT_TARGET_NODES_TO_FIND,
            max_parallel_dials: DEFAULT_MAX_PARALLEL_DIALS,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            tcp_port: DEFAULT_TCP_PORT,
            http_port: DEFAULT_HTTP_PORT,
            gossip_sub_enabled: true,
            enable_discovery: true,
            bootnodes: Vec::new(),
            log_level: LogLevel::default(),
            network,
            genesis_time: preset.map(|p| p.genesis_time),
            genesis_validators_root: preset.map(|p| p.genesis_validators_root),
            preset: preset.map(|p| p.size_preset),
            trusted_block_root: None,
        }
    }

    /// Turn into [`ClientOptions`].
    ///
    /// Returns the partial options back when any genesis field is still
    /// missing.
    pub fn finish(self) -> Result<ClientOptions, Self> {
        let (Some(genesis_time), Some(genesis_validators_root), Some(preset)) =
            (self.genesis_time, self.genesis_validators_root, self.preset)
        else {
            return Err(self);
        };

        Ok(ClientOptions {
            datadir: self.datadir,
            target_peer_count: self.target_peer_count,
            target_nodes_to_find: self.target_nodes_to_find,
            max_parallel_dials: self.max_parallel_dials,
            dial_timeout: self.dial_timeout,
            tcp_port: self.tcp_port,
            http_port: self.http_port,
            gossip_sub_enabled: self.gossip_sub_enabled,
            enable_discovery: self.enable_discovery,
            bootnodes: self.bootnodes,
            log_level: self.log_level,
            sync: SyncProtocolOptions {
                network: self.network,
                genesis_time,
                genesis_validators_root,
                trusted_block_root: self.trusted_block_root,
                preset,
            },
        })
    }
}
