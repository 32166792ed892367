//! Filesystem helpers.

use std::env;
use std::path::PathBuf;

/// The process's current working directory.
///
/// Returns an empty path if it cannot be determined.
pub fn working_dir() -> PathBuf {
    match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "could not get home directory");
            PathBuf::new()
        }
    }
}
