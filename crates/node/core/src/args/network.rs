//! Stage one: resolve the network discriminant.

use beacon_network_spec::NetworkType;
use tracing::debug;

use super::{ArgsError, Flag};
use crate::config::PartialOptions;

/// Output of network resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNetwork {
    /// The network everything else is resolved against.
    pub network: NetworkType,
    /// Defaults for that network, genesis data seeded from its preset.
    pub options: PartialOptions,
}

/// Find the network the command line selects.
///
/// Only the first `--network` is honored. Without one the client follows
/// mainnet.
pub fn resolve_network(args: &[String]) -> Result<ResolvedNetwork, ArgsError> {
    let network = match args.iter().position(|arg| Flag::from_token(arg) == Some(Flag::Network))
    {
        Some(index) => {
            let value = args
                .get(index + 1)
                .ok_or(ArgsError::MissingValue { flag: Flag::Network.name() })?;
            NetworkType::from_name(value)
                .ok_or_else(|| ArgsError::UnsupportedNetwork { value: value.clone() })?
        }
        None => NetworkType::default(),
    };

    debug!(%network, "Resolved network");

    Ok(ResolvedNetwork { network, options: PartialOptions::for_network(network) })
}
