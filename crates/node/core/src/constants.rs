//! Constants used throughout the beacon light client.
//!
//! Default values for every option the command line can override live here.

use std::time::Duration;

// =============================================================================
// Command line
// =============================================================================

/// Marker every flag token starts with.
pub const FLAG_PREFIX: &str = "--";

/// Optional prefix accepted in front of hex-encoded roots.
pub const HEX_PREFIX: &str = "0x";

/// Binary name shown in the usage listing.
pub const BINARY_NAME: &str = "beacon-lc";

// =============================================================================
// Peers
// =============================================================================

/// Default number of peers the client keeps connections to.
pub const DEFAULT_TARGET_PEER_COUNT: usize = 1;

/// Default number of nodes discovery tries to find.
pub const DEFAULT_TARGET_NODES_TO_FIND: usize = 100;

/// Default number of dials in flight at once.
pub const DEFAULT_MAX_PARALLEL_DIALS: usize = 10;

/// Default dial timeout.
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Ports
// =============================================================================

/// Default port for libp2p TCP connections.
pub const DEFAULT_TCP_PORT: u16 = 9000;

/// Default port for the HTTP API.
pub const DEFAULT_HTTP_PORT: u16 = 5052;

// =============================================================================
// Storage
// =============================================================================

/// Name of the directory the client creates below the data directory.
pub const DATA_DIR_NAME: &str = "beacon-lc";

/// Database file name inside [`DATA_DIR_NAME`].
pub const DATABASE_FILE_NAME: &str = "beacon-lc.db";

/// Fallback data directory when no platform directory is available.
pub const FALLBACK_DATA_DIR: &str = ".beacon-lc";
