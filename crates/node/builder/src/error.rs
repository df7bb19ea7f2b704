//! Launch errors.

use std::{io, path::PathBuf};

/// Error produced while launching the client.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The data directory could not be created.
    #[error("failed to prepare data directory {}: {source}", path.display())]
    DataDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
