//! Argument parsing errors.

use std::num::ParseIntError;

use beacon_network_spec::NetworkType;

/// Reason a flag value failed its coercion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Not an integer in the accepted range.
    #[error("{0}")]
    Integer(#[from] ParseIntError),

    /// Neither `true` nor `false`.
    #[error("expected `true` or `false`")]
    Boolean,

    /// Not valid hex (odd length or a non-hex character).
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Valid hex of the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    DigestLength {
        /// Required length in bytes.
        expected: usize,
        /// Decoded length in bytes.
        actual: usize,
    },

    /// Not one of the accepted names.
    #[error("expected one of: {expected}")]
    UnknownName {
        /// Accepted names, separated by `|`.
        expected: String,
    },
}

/// Error produced while resolving the command line.
///
/// The first error aborts the whole parse; no partial configuration is
/// returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    /// A flag that takes a value was the last token.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag.
        flag: &'static str,
    },

    /// A flag value failed its coercion.
    #[error("invalid value `{value}` for {flag}: {source}")]
    InvalidValue {
        /// The flag.
        flag: &'static str,
        /// The value token, as given.
        value: String,
        /// Why it was rejected.
        source: ValueError,
    },

    /// A token that is not valid UTF-8.
    #[error("argument is not valid UTF-8: {arg}")]
    InvalidEncoding {
        /// The token, lossily converted.
        arg: String,
    },

    /// A token that is not a recognized flag.
    #[error("unknown argument: {arg}")]
    UnknownArgument {
        /// The token, as given.
        arg: String,
    },

    /// `--network` named a network that is not supported.
    #[error("unsupported network: {value}")]
    UnsupportedNetwork {
        /// The network token, as given.
        value: String,
    },

    /// A custom-network-only flag was given for a known network.
    #[error("{flag} can only be used with --network custom (active network: {network})")]
    InvalidArgumentForNetwork {
        /// The flag.
        flag: &'static str,
        /// The network in effect.
        network: NetworkType,
    },

    /// A flag a custom network requires was not given.
    #[error("missing required argument: {flag} - {description}")]
    MissingRequiredArgument {
        /// The flag.
        flag: &'static str,
        /// What the flag sets.
        description: &'static str,
    },
}

impl ArgsError {
    /// The flag or token this error is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingValue { flag }
            | Self::InvalidValue { flag, .. }
            | Self::InvalidArgumentForNetwork { flag, .. }
            | Self::MissingRequiredArgument { flag, .. } => flag,
            Self::UnknownArgument { arg } | Self::InvalidEncoding { arg } => arg,
            Self::UnsupportedNetwork { value } => value,
        }
    }
}
