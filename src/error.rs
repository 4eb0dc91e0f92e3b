//! Error handling module for carpark
//!
//! Garage outcomes such as "garage full" are ordinary values (see
//! [`crate::garage::Admission`] and [`crate::garage::Departure`]). The types
//! here cover failures to read a command script. Output failures stay plain
//! `std::io::Error` and are given context in `main`.
//!
//! The `<reason>` in `Error reading file: <reason>` is the `io::Error`
//! message alone, e.g. `No such file or directory (os error 2)`. It does not
//! repeat the path, unlike the `<path> (No such file or directory)` form some
//! runtimes print; the path is logged to stderr instead.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for carpark
#[derive(Error, Debug)]
pub enum CarparkError {
    /// The command script could not be opened or read
    #[error("Failed to read command script {path:?}: {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for carpark operations
pub type Result<T> = std::result::Result<T, CarparkError>;

impl CarparkError {
    /// Create a script read error for `path`
    pub fn script(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Script {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The underlying IO error message, without any path decoration.
    ///
    /// This is the `<reason>` part of the `Error reading file: <reason>` line.
    pub fn reason(&self) -> String {
        match self {
            Self::Script { source, .. } => source.to_string(),
        }
    }
}
