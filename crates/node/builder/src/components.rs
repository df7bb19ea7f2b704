//! Per-subsystem configuration derived from [`ClientOptions`].

use std::{path::PathBuf, time::Duration};

use beacon_node_core::{
    config::{ClientOptions, SyncProtocolOptions},
    logging::LoggerFactory,
};

/// Discovery settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Whether discovery runs at all.
    pub enabled: bool,
    /// Number of nodes to look for.
    pub target_nodes_to_find: usize,
    /// Bootstrap records of the network; empty for a custom network.
    pub bootstrap_enrs: Vec<String>,
}

impl From<&ClientOptions> for DiscoveryConfig {
    fn from(options: &ClientOptions) -> Self {
        let bootstrap_enrs = options
            .preset()
            .map(|preset| preset.bootstrap_enrs.iter().map(|enr| (*enr).to_owned()).collect())
            .unwrap_or_default();

        Self {
            enabled: options.enable_discovery,
            target_nodes_to_find: options.target_nodes_to_find,
            bootstrap_enrs,
        }
    }
}

/// Peer-to-peer transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// libp2p TCP port.
    pub tcp_port: u16,
    /// HTTP API port.
    pub http_port: u16,
    /// Number of dials in flight at once.
    pub max_parallel_dials: usize,
    /// How long a single dial may take.
    pub dial_timeout: Duration,
    /// Whether gossipsub is enabled.
    pub gossip_sub_enabled: bool,
    /// Number of peers to keep connections to.
    pub target_peer_count: usize,
    /// Operator-supplied bootnodes.
    pub bootnodes: Vec<String>,
}

impl From<&ClientOptions> for TransportConfig {
    fn from(options: &ClientOptions) -> Self {
        Self {
            tcp_port: options.tcp_port,
            http_port: options.http_port,
            max_parallel_dials: options.max_parallel_dials,
            dial_timeout: options.dial_timeout,
            gossip_sub_enabled: options.gossip_sub_enabled,
            target_peer_count: options.target_peer_count,
            bootnodes: options.bootnodes.clone(),
        }
    }
}

/// Sync protocol settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Protocol options.
    pub protocol: SyncProtocolOptions,
    /// Path of the client database.
    pub database_path: PathBuf,
}

impl From<&ClientOptions> for SyncConfig {
    fn from(options: &ClientOptions) -> Self {
        Self { protocol: options.sync.clone(), database_path: options.database_path() }
    }
}

/// A subsystem's configuration together with its logger factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsystem<C> {
    /// Subsystem configuration.
    pub config: C,
    /// Factory the subsystem creates its loggers from.
    pub loggers: LoggerFactory,
}

impl<C> Subsystem<C> {
    /// Pair `config` with `loggers`.
    pub const fn new(config: C, loggers: LoggerFactory) -> Self {
        Self { config, loggers }
    }
}

/// Everything the client is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientComponents {
    /// Peer discovery.
    pub discovery: Subsystem<DiscoveryConfig>,
    /// Peer-to-peer transport.
    pub transport: Subsystem<TransportConfig>,
    /// Sync protocol.
    pub sync: Subsystem<SyncConfig>,
}

impl ClientComponents {
    /// Derive every subsystem's configuration from `options`.
    ///
    /// Discovery always gets a silenced factory.
    pub fn new(options: &ClientOptions, loggers: LoggerFactory) -> Self {
        Self {
            discovery: Subsystem::new(options.into(), LoggerFactory::silenced()),
            transport: Subsystem::new(options.into(), loggers),
            sync: Subsystem::new(options.into(), loggers),
        }
    }
}
