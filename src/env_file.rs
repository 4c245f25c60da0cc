//! Seeding the process environment from `.env` files.
//!
//! Variables already present in the environment are never overridden.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{ConfigError, Result};

const DOTENV: &str = ".env";

/// Find the nearest `.env` file in `start` or one of its ancestors.
#[must_use]
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV))
        .find(|candidate| candidate.is_file())
}

/// Load `.env` from the current directory or one of its ancestors.
///
/// Returns the path that was loaded, or `None` if no file was found.
/// A file that exists but cannot be parsed is an error naming that file.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir().map_err(|e| ConfigError::EnvFile {
        path: PathBuf::from(DOTENV),
        message: format!("cannot determine current directory: {e}"),
    })?;
    match find_dotenv(&cwd) {
        Some(path) => load_env_file(&path).map(Some),
        None => {
            debug!(start = %cwd.display(), "no .env file found");
            Ok(None)
        }
    }
}

/// Load an explicit environment file. A missing file is an error.
pub fn load_env_file(path: &Path) -> Result<PathBuf> {
    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), "Loaded environment file");
    Ok(path.to_path_buf())
}
