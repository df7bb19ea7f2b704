//! End-to-end resolution of command lines.

use std::{path::PathBuf, time::Duration};

use assert_matches::assert_matches;
use beacon_network_spec::{B256, NetworkType, SizePreset};
use beacon_node_core::{
    args::{ArgsError, ValueError, parse_args},
    logging::LogLevel,
};
use proptest::prelude::*;

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn parse(tokens: &[&str]) -> Result<beacon_node_core::config::ClientOptions, ArgsError> {
    parse_args(&args(tokens))
}

const CUSTOM_ROOT: &str = "0x9143aa7c615a7f7115e2b6aac319c03529df8242ae705fba9df39b79c59fa8b1";

#[test]
fn empty_command_line_follows_mainnet() {
    let options = parse(&[]).unwrap();
    assert_eq!(options.network(), NetworkType::Mainnet);
    assert_eq!(options.sync.genesis_time, 1606824023);
    assert_eq!(options.sync.preset, SizePreset::Mainnet);
    assert_eq!(options.sync.trusted_block_root, None);
    assert_eq!(options.log_level, LogLevel::Info);
    assert!(options.bootnodes.is_empty());
}

#[test]
fn holesky_takes_genesis_from_preset() {
    let options = parse(&["--network", "holesky"]).unwrap();
    assert_eq!(options.sync.genesis_time, 1695902400);
    assert_eq!(options.sync.genesis_validators_root, B256::from_slice(&hex_root(CUSTOM_ROOT)));
}

#[test]
fn custom_network_without_genesis_time() {
    assert_matches!(
        parse(&["--network", "custom"]),
        Err(ArgsError::MissingRequiredArgument { flag: "--genesis-time", description })
            if description.contains("UNIX timestamp")
    );
}

#[test]
fn custom_network_missing_preset() {
    assert_matches!(
        parse(&[
            "--network",
            "custom",
            "--genesis-time",
            "10",
            "--genesis-validators-root",
            CUSTOM_ROOT,
        ]),
        Err(ArgsError::MissingRequiredArgument { flag: "--preset", .. })
    );
}

#[test]
fn custom_network_complete() {
    let options = parse(&[
        "--genesis-time",
        "1700000000",
        "--network",
        "Custom",
        "--preset",
        "custom",
        "--genesis-validators-root",
        CUSTOM_ROOT,
    ])
    .unwrap();

    assert_eq!(options.network(), NetworkType::Custom);
    assert_eq!(options.sync.genesis_time, 1700000000);
    assert_eq!(options.sync.preset, SizePreset::Minimal);
    assert!(options.preset().is_none());
}

#[test]
fn genesis_override_on_mainnet() {
    assert_matches!(
        parse(&["--network", "mainnet", "--genesis-time", "123"]),
        Err(ArgsError::InvalidArgumentForNetwork {
            flag: "--genesis-time",
            network: NetworkType::Mainnet
        })
    );
}

#[test]
fn odd_length_block_root() {
    assert_matches!(
        parse(&["--block-root", "0xAABBC"]),
        Err(ArgsError::InvalidValue { flag: "--block-root", source: ValueError::Hex(_), .. })
    );
}

#[test]
fn bootnodes_stop_at_next_flag() {
    let options = parse(&["--bootnodes", "enr:aa", "enr:bb", "--tcp-port", "9001"]).unwrap();
    assert_eq!(options.bootnodes, vec!["enr:aa".to_string(), "enr:bb".to_string()]);
    assert_eq!(options.tcp_port, 9001);
}

#[test]
fn non_numeric_peer_count() {
    assert_matches!(
        parse(&["--peer-count", "abc"]),
        Err(ArgsError::InvalidValue { flag: "--peer-count", .. })
    );
}

#[test]
fn unknown_argument_aborts_before_later_flags() {
    // the invalid port after `--foo` would fail too if it were reached
    let err = parse(&["--foo", "--tcp-port", "oops"]).unwrap_err();
    assert_matches!(&err, ArgsError::UnknownArgument { arg } if arg == "--foo");
    assert_eq!(err.subject(), "--foo");
    assert_eq!(err.to_string(), "unknown argument: --foo");
}

#[test]
fn unsupported_network_is_reported_before_binding() {
    assert_matches!(
        parse(&["--foo", "--network", "ropsten"]),
        Err(ArgsError::UnsupportedNetwork { value }) if value == "ropsten"
    );
}

#[test]
fn custom_only_flag_checked_before_validation() {
    // gating wins over the missing custom flags of another network
    assert_matches!(
        parse(&["--network", "holesky", "--preset", "minimal"]),
        Err(ArgsError::InvalidArgumentForNetwork { network: NetworkType::Holesky, .. })
    );
}

#[test]
fn error_messages_name_the_flag() {
    let err = parse(&["--http-port"]).unwrap_err();
    assert_eq!(err.to_string(), "missing value for --http-port");

    let err = parse(&["--network", "mainnet", "--preset", "minimal"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "--preset can only be used with --network custom (active network: mainnet)"
    );
}

#[test]
fn datadir_is_kept_verbatim() {
    let options = parse(&["--datadir", "/tmp/client data"]).unwrap();
    assert_eq!(options.datadir, PathBuf::from("/tmp/client data"));
    assert_eq!(options.database_path(), PathBuf::from("/tmp/client data/beacon-lc/beacon-lc.db"));
}

fn hex_root(value: &str) -> Vec<u8> {
    hex::decode(value.trim_start_matches("0x")).unwrap()
}

proptest! {
    #[test]
    fn peer_counts_roundtrip(peers in any::<usize>(), nodes in any::<usize>(), dials in any::<usize>()) {
        let (peers_s, nodes_s, dials_s) = (peers.to_string(), nodes.to_string(), dials.to_string());
        let options = parse(&[
            "--peer-count", &peers_s,
            "--discovery-peer-count", &nodes_s,
            "--dial-parallelism", &dials_s,
        ]).unwrap();
        prop_assert_eq!(options.target_peer_count, peers);
        prop_assert_eq!(options.target_nodes_to_find, nodes);
        prop_assert_eq!(options.max_parallel_dials, dials);
    }

    #[test]
    fn ports_and_timeout_roundtrip(tcp in any::<u16>(), http in any::<u16>(), timeout in any::<u64>()) {
        let (tcp_s, http_s, timeout_s) = (tcp.to_string(), http.to_string(), timeout.to_string());
        let options = parse(&[
            "--tcp-port", &tcp_s,
            "--http-port", &http_s,
            "--dial-timeout", &timeout_s,
        ]).unwrap();
        prop_assert_eq!(options.tcp_port, tcp);
        prop_assert_eq!(options.http_port, http);
        prop_assert_eq!(options.dial_timeout, Duration::from_secs(timeout));
    }

    #[test]
    fn booleans_roundtrip(gossip in any::<bool>(), discovery in any::<bool>()) {
        let (gossip_s, discovery_s) = (gossip.to_string(), discovery.to_string());
        let options = parse(&[
            "--gossip-sub-enabled", &gossip_s,
            "--enable-discovery", &discovery_s,
        ]).unwrap();
        prop_assert_eq!(options.gossip_sub_enabled, gossip);
        prop_assert_eq!(options.enable_discovery, discovery);
    }

    #[test]
    fn roots_roundtrip(bytes in any::<[u8; 32]>(), prefixed in any::<bool>()) {
        let root = B256::from(bytes);
        let encoded = if prefixed { format!("0x{}", hex::encode(bytes)) } else { hex::encode(bytes) };

        let options = parse(&["--block-root", &encoded]).unwrap();
        prop_assert_eq!(options.sync.trusted_block_root, Some(root));

        let options = parse(&[
            "--network", "custom",
            "--genesis-validators-root", &encoded,
            "--genesis-time", "0",
            "--preset", "mainnet",
        ]).unwrap();
        prop_assert_eq!(options.sync.genesis_validators_root, root);
    }

    #[test]
    fn genesis_time_roundtrip(time in any::<u64>()) {
        let time_s = time.to_string();
        let options = parse(&[
            "--network", "custom",
            "--genesis-time", &time_s,
            "--genesis-validators-root", CUSTOM_ROOT,
            "--preset", "minimal",
        ]).unwrap();
        prop_assert_eq!(options.sync.genesis_time, time);
    }

    #[test]
    fn datadir_roundtrip(path in "[a-zA-Z0-9_./ ]{1,32}") {
        let options = parse(&["--datadir", &path]).unwrap();
        prop_assert_eq!(options.datadir, PathBuf::from(&path));
    }

    #[test]
    fn log_level_roundtrip(level in prop::sample::select(vec![
        LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Warn,
        LogLevel::Error, LogLevel::Critical, LogLevel::Off,
    ])) {
        let name = level.to_string();
        let options = parse(&["--log-level", &name]).unwrap();
        prop_assert_eq!(options.log_level, level);
    }

    #[test]
    fn bootnodes_roundtrip(nodes in prop::collection::vec("[a-z0-9:/.]{1,16}", 0..8)) {
        let mut tokens = vec!["--bootnodes"];
        tokens.extend(nodes.iter().map(String::as_str));
        tokens.extend(["--tcp-port", "1"]);

        let options = parse(&tokens).unwrap();
        prop_assert_eq!(options.bootnodes, nodes);
        prop_assert_eq!(options.tcp_port, 1);
    }
}
