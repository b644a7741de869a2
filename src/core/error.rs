use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("store file '{path}' does not parse as a credential map: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
