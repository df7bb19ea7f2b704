//! Command-line resolution.
//!
//! Tokens are resolved in three ordered stages:
//!
//! 1. [`resolve_network`] finds the network and seeds its preset defaults.
//! 2. [`bind_flags`] applies every flag on top of those defaults.
//! 3. [`ensure_required`] checks a custom network got its genesis flags.
//!
//! [`parse_args`] runs all three and yields the final [`ClientOptions`].
//!
//! ```ignore
//! let args = beacon_node_core::args::collect_args(std::env::args_os().skip(1))?;
//! let options = beacon_node_core::args::parse_args(&args)?;
//! ```

mod binder;
pub mod coerce;
mod error;
mod flags;
mod network;
mod validate;

pub use binder::{bind_flags, list_len};
pub use error::{ArgsError, ValueError};
pub use flags::{Flag, REQUIRED_FOR_CUSTOM};
pub use network::{ResolvedNetwork, resolve_network};
pub use validate::ensure_required;

use std::ffi::OsString;

use tracing::debug;

use crate::config::{ClientOptions, PartialOptions};

/// Convert raw process arguments into tokens.
///
/// The first token that is not valid UTF-8 fails with
/// [`ArgsError::InvalidEncoding`].
pub fn collect_args<I>(args: I) -> Result<Vec<String>, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| ArgsError::InvalidEncoding {
                arg: arg.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Resolve the command line into client options.
pub fn parse_args(args: &[String]) -> Result<ClientOptions, ArgsError> {
    let resolved = resolve_network(args)?;
    let network = resolved.network;

    let options = bind_flags(args, resolved)?;
    ensure_required(args, network)?;

    let options = options.finish().map_err(|partial| missing_genesis(&partial))?;
    debug!(
        network = %options.network(),
        peers = options.target_peer_count,
        bootnodes = options.bootnodes.len(),
        "Resolved client options"
    );
    Ok(options)
}

fn missing_genesis(options: &PartialOptions) -> ArgsError {
    let flag = if options.genesis_time.is_none() {
        Flag::GenesisTime
    } else if options.genesis_validators_root.is_none() {
        Flag::GenesisValidatorsRoot
    } else {
        Flag::Preset
    };
    ArgsError::MissingRequiredArgument { flag: flag.name(), description: flag.description() }
}
