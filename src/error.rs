use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that end the program.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Reasons an asset could not be used.  Never fatal: callers fall back to
/// drawn shapes or silence.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{0} is not a RIFF/WAVE file")]
    NotWave(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
}
