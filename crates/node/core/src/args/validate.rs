//! Completeness check for network-dependent required flags.

use beacon_network_spec::NetworkType;

use super::{ArgsError, Flag, REQUIRED_FOR_CUSTOM};

/// Check that a custom network was given all of its genesis flags.
///
/// Looks at the tokens rather than the bound values, so a seeded default can
/// never stand in for an explicit flag. Known networks have nothing to check.
pub fn ensure_required(args: &[String], network: NetworkType) -> Result<(), ArgsError> {
    if network.is_known() {
        return Ok(());
    }

    match REQUIRED_FOR_CUSTOM
        .into_iter()
        .find(|required| !args.iter().any(|arg| Flag::from_token(arg) == Some(*required)))
    {
        Some(flag) => Err(ArgsError::MissingRequiredArgument {
            flag: flag.name(),
            description: flag.description(),
        }),
        None => Ok(()),
    }
}
