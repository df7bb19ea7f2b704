//! Version information for the beacon light client.

/// The version string from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The git commit SHA (set by build.rs if available).
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// The build timestamp (set by build.rs if available).
pub const BUILD_TIMESTAMP: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => "unknown",
};

/// The target triple the binary was built for (set by build.rs if available).
pub const TARGET_TRIPLE: &str = match option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
    Some(triple) => triple,
    None => "unknown",
};

/// Client identifier advertised to peers.
pub const CLIENT_VERSION: &str = concat!("beacon-lc/v", env!("CARGO_PKG_VERSION"));

/// One-line version summary for startup logs.
pub fn long_version() -> String {
    format!("{VERSION} ({GIT_SHA}, {TARGET_TRIPLE}, built {BUILD_TIMESTAMP})")
}
