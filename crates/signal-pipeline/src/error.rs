//! Pipeline Error Types

use feature_engine::FeatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the input signal
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("Signal file not found at: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("Failed to read signal file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field is not a number
    #[error("Invalid numeric value {value:?} on line {line} of {}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

/// Failure of a single chunk; the pipeline skips the chunk and continues
#[derive(Debug, Error)]
#[error("Processing failed for chunk {index}: {source}")]
pub struct ChunkProcessingError {
    /// Position of the skipped chunk
    pub index: usize,
    #[source]
    pub source: FeatureError,
}

/// Errors that end a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before the run
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Output table could not be written
    #[error("Failed to write features to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration sources could not be merged
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
