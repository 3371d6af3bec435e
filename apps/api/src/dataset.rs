//! Dataset Loader — reads the static career dataset into memory at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::career::CareerRecord;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read career dataset at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("career dataset at {path} is not a valid JSON array of careers: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads every career record from `path`, preserving file order.
pub fn load_careers(path: &Path) -> Result<Vec<CareerRecord>, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let careers: Vec<CareerRecord> =
        serde_json::from_str(&raw).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} careers from {}", careers.len(), path.display());
    Ok(careers)
}
