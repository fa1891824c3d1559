use dbgen_build::{BuildError, config::ConfigError};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize models: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no output root given; pass --root or set DBGEN_ROOT")]
    MissingRoot,
}
