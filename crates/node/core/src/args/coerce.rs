//! Typed coercions from value tokens.
//!
//! Each function turns one value token into the type its flag binds to and
//! reports failures as [`ArgsError::InvalidValue`] naming the flag.

use std::str::FromStr;

use alloy_primitives::B256;
use beacon_network_spec::{ROOT_LENGTH, SizePreset};
use clap::ValueEnum;

use super::{ArgsError, Flag, ValueError};
use crate::{constants::HEX_PREFIX, logging::LogLevel};

/// Names clap accepts for `T`, joined by `|`.
pub(crate) fn possible_names<T: ValueEnum>() -> String {
    T::value_variants()
        .iter()
        .filter_map(|variant| variant.to_possible_value())
        .map(|value| value.get_name().to_owned())
        .collect::<Vec<_>>()
        .join("|")
}

fn invalid(flag: Flag, value: &str, source: impl Into<ValueError>) -> ArgsError {
    ArgsError::InvalidValue { flag: flag.name(), value: value.to_owned(), source: source.into() }
}

/// Parse an unsigned integer (counts, ports, seconds, timestamps).
///
/// Anything outside the range of `T`, including a sign, is rejected.
pub fn integer<T>(flag: Flag, value: &str) -> Result<T, ArgsError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|err| invalid(flag, value, err))
}

/// Parse `true` or `false`, ignoring ASCII case.
pub fn boolean(flag: Flag, value: &str) -> Result<bool, ArgsError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid(flag, value, ValueError::Boolean))
    }
}

/// Decode a hex-encoded 32-byte root.
///
/// A leading `0x` is optional. The rest must be even-length hex decoding to
/// exactly [`ROOT_LENGTH`] bytes.
pub fn root(flag: Flag, value: &str) -> Result<B256, ArgsError> {
    let digits = strip_hex_prefix(value);
    let bytes = hex::decode(digits).map_err(|err| invalid(flag, value, err))?;

    let bytes: [u8; ROOT_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
        invalid(flag, value, ValueError::DigestLength { expected: ROOT_LENGTH, actual: bytes.len() })
    })?;

    Ok(B256::from(bytes))
}

fn strip_hex_prefix(value: &str) -> &str {
    match value.get(..HEX_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(HEX_PREFIX) => {
            value.get(HEX_PREFIX.len()..).unwrap_or_default()
        }
        _ => value,
    }
}

/// Resolve a log level by name.
pub fn log_level(flag: Flag, value: &str) -> Result<LogLevel, ArgsError> {
    LogLevel::from_name(value).ok_or_else(|| {
        invalid(flag, value, ValueError::UnknownName { expected: possible_names::<LogLevel>() })
    })
}

/// Resolve a size preset by network or size-class name.
pub fn size_preset(flag: Flag, value: &str) -> Result<SizePreset, ArgsError> {
    SizePreset::from_name(value).ok_or_else(|| {
        let expected = format!(
            "{}|{}",
            possible_names::<beacon_network_spec::NetworkType>(),
            possible_names::<SizePreset>()
        );
        invalid(flag, value, ValueError::UnknownName { expected })
    })
}
