//! Stage two: bind every flag to its field.

use beacon_network_spec::NetworkType;
use tracing::trace;

use super::{ArgsError, Flag, ResolvedNetwork, coerce};
use crate::{config::PartialOptions, constants::FLAG_PREFIX};

/// Number of leading tokens in `rest` that belong to a list flag.
///
/// `list := value* until lookahead starts with "--" or end-of-input`
pub fn list_len(rest: &[String]) -> usize {
    rest.iter().take_while(|token| !token.starts_with(FLAG_PREFIX)).count()
}

/// Apply every flag on the command line to the options resolved in stage one.
///
/// Stops at the first token that is not a recognized flag. `--network` and
/// its value were consumed by stage one and are skipped here.
pub fn bind_flags(args: &[String], resolved: ResolvedNetwork) -> Result<PartialOptions, ArgsError> {
    let ResolvedNetwork { network, mut options } = resolved;
    let mut index = 0;

    while let Some(arg) = args.get(index) {
        let flag = Flag::from_token(arg)
            .ok_or_else(|| ArgsError::UnknownArgument { arg: arg.clone() })?;

        ensure_allowed(flag, network)?;

        match flag {
            Flag::Network => index += 2,
            list if list.is_list() => {
                let rest = args.get(index + 1..).unwrap_or_default();
                let count = list_len(rest);
                options.bootnodes.extend(rest.iter().take(count).cloned());
                trace!(flag = list.name(), count, "Bound list");
                index += 1 + count;
            }
            _ => {
                let value =
                    args.get(index + 1).ok_or(ArgsError::MissingValue { flag: flag.name() })?;
                bind_value(&mut options, flag, value)?;
                trace!(flag = flag.name(), value = %value, "Bound flag");
                index += 2;
            }
        }
    }

    Ok(options)
}

fn ensure_allowed(flag: Flag, network: NetworkType) -> Result<(), ArgsError> {
    if flag.custom_network_only() && network.is_known() {
        return Err(ArgsError::InvalidArgumentForNetwork { flag: flag.name(), network });
    }
    Ok(())
}

fn bind_value(options: &mut PartialOptions, flag: Flag, value: &str) -> Result<(), ArgsError> {
    match flag {
        Flag::GenesisTime => options.genesis_time = Some(coerce::integer(flag, value)?),
        Flag::GenesisValidatorsRoot => {
            options.genesis_validators_root = Some(coerce::root(flag, value)?)
        }
        Flag::Preset => options.preset = Some(coerce::size_preset(flag, value)?),
        Flag::BlockRoot => options.trusted_block_root = Some(coerce::root(flag, value)?),
        Flag::DataDir => options.datadir = value.into(),
        Flag::PeerCount => options.target_peer_count = coerce::integer(flag, value)?,
        Flag::DiscoveryPeerCount => options.target_nodes_to_find = coerce::integer(flag, value)?,
        Flag::DialParallelism => options.max_parallel_dials = coerce::integer(flag, value)?,
        Flag::DialTimeout => {
            options.dial_timeout = std::time::Duration::from_secs(coerce::integer(flag, value)?)
        }
        Flag::TcpPort => options.tcp_port = coerce::integer(flag, value)?,
        Flag::HttpPort => options.http_port = coerce::integer(flag, value)?,
        Flag::GossipSubEnabled => options.gossip_sub_enabled = coerce::boolean(flag, value)?,
        Flag::EnableDiscovery => options.enable_discovery = coerce::boolean(flag, value)?,
        Flag::LogLevel => options.log_level = coerce::log_level(flag, value)?,
        // consumed by the caller
        Flag::Network | Flag::Bootnodes => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::resolve_network;
    use assert_matches::assert_matches;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn bind(tokens: &[&str]) -> Result<PartialOptions, ArgsError> {
        let args = args(tokens);
        let resolved = resolve_network(&args)?;
        bind_flags(&args, resolved)
    }

    #[test]
    fn test_list_len_stops_at_flag() {
        assert_eq!(list_len(&args(&["a", "b", "--tcp-port", "1"])), 2);
        assert_eq!(list_len(&args(&["a", "b"])), 2);
        assert_eq!(list_len(&args(&["--tcp-port"])), 0);
        assert_eq!(list_len(&[]), 0);
    }

    #[test]
    fn test_list_len_single_dash_is_a_value() {
        assert_eq!(list_len(&args(&["-x", "/ip4/1.2.3.4/tcp/9000"])), 2);
    }

    #[test]
    fn test_bootnodes_then_scalar() {
        let options = bind(&["--bootnodes", "enr:aa", "enr:bb", "--tcp-port", "9001"]).unwrap();
        assert_eq!(options.bootnodes, vec!["enr:aa", "enr:bb"]);
        assert_eq!(options.tcp_port, 9001);
    }

    #[test]
    fn test_bootnodes_accumulate_and_may_be_empty() {
        let options = bind(&["--bootnodes", "a", "--bootnodes", "--bootnodes", "b"]).unwrap();
        assert_eq!(options.bootnodes, vec!["a", "b"]);

        let options = bind(&["--bootnodes"]).unwrap();
        assert!(options.bootnodes.is_empty());
    }

    #[test]
    fn test_network_value_is_skipped() {
        let options = bind(&["--network", "holesky", "--http-port", "8080"]).unwrap();
        assert_eq!(options.network, NetworkType::Holesky);
        assert_eq!(options.http_port, 8080);
    }

    #[test]
    fn test_unknown_argument_stops_binding() {
        assert_matches!(
            bind(&["--tcp-port", "1", "--foo", "--http-port", "not-a-port"]),
            Err(ArgsError::UnknownArgument { arg }) if arg == "--foo"
        );
    }

    #[test]
    fn test_stray_value_is_unknown() {
        assert_matches!(
            bind(&["--tcp-port", "1", "2"]),
            Err(ArgsError::UnknownArgument { arg }) if arg == "2"
        );
    }

    #[test]
    fn test_missing_value_names_flag() {
        assert_matches!(
            bind(&["--dial-timeout"]),
            Err(ArgsError::MissingValue { flag: "--dial-timeout" })
        );
    }

    #[test]
    fn test_invalid_value_names_flag() {
        assert_matches!(
            bind(&["--peer-count", "abc"]),
            Err(ArgsError::InvalidValue { flag: "--peer-count", value, .. }) if value == "abc"
        );
    }

    #[test]
    fn test_genesis_flags_rejected_for_known_networks() {
        assert_matches!(
            bind(&["--network", "mainnet", "--genesis-time", "123"]),
            Err(ArgsError::InvalidArgumentForNetwork {
                flag: "--genesis-time",
                network: NetworkType::Mainnet,
            })
        );
        assert_matches!(
            bind(&["--preset", "minimal"]),
            Err(ArgsError::InvalidArgumentForNetwork { flag: "--preset", .. })
        );
        assert_matches!(
            bind(&["--network", "holesky", "--genesis-validators-root"]),
            Err(ArgsError::InvalidArgumentForNetwork {
                flag: "--genesis-validators-root",
                network: NetworkType::Holesky,
            })
        );
    }

    #[test]
    fn test_genesis_flags_bound_for_custom() {
        let root = format!("0x{}", "ab".repeat(32));
        let options = bind(&[
            "--network",
            "custom",
            "--genesis-time",
            "1700000000",
            "--genesis-validators-root",
            root.as_str(),
            "--preset",
            "minimal",
        ])
        .unwrap();
        assert_eq!(options.genesis_time, Some(1700000000));
        assert_eq!(
            options.genesis_validators_root,
            Some(beacon_network_spec::B256::repeat_byte(0xab))
        );
        assert_eq!(options.preset, Some(beacon_network_spec::SizePreset::Minimal));
    }

    #[test]
    fn test_flags_ignore_case() {
        let options = bind(&["--Gossip-Sub-Enabled", "FALSE", "--LOG-LEVEL", "Warning"]).unwrap();
        assert!(!options.gossip_sub_enabled);
        assert_eq!(options.log_level, crate::logging::LogLevel::Warn);
    }
}
