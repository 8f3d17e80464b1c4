//! Pipeline configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `signal-lab.toml`, then `SIGNAL_LAB_*` environment variables. CLI flags are
//! applied on top by the binary.

use crate::PipelineError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default chunk size (samples)
pub const DEFAULT_CHUNK_SIZE: usize = 500;
/// Default moving window size (samples)
pub const DEFAULT_WINDOW_SIZE: usize = 10;
/// Default slow-call warning threshold (milliseconds)
pub const DEFAULT_SLOW_THRESHOLD_MS: f64 = 20.0;

/// Name of the optional config file looked up in the working directory
const CONFIG_FILE_STEM: &str = "signal-lab";
/// Environment variable prefix
const ENV_PREFIX: &str = "SIGNAL_LAB";

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input signal file
    pub input_path: PathBuf,
    /// Output features file
    pub output_path: PathBuf,
    /// Samples per chunk
    pub chunk_size: usize,
    /// Samples per moving window
    pub window_size: usize,
    /// Per-chunk timing above this is logged as a slow call
    pub slow_threshold_ms: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/signal.csv"),
            output_path: PathBuf::from("output/features.csv"),
            chunk_size: DEFAULT_CHUNK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            slow_threshold_ms: DEFAULT_SLOW_THRESHOLD_MS,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// With `file = None`, `signal-lab.toml` in the working directory is read if
    /// present. An explicit file must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, PipelineError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("input_path", defaults.input_path.to_string_lossy().into_owned())?
            .set_default("output_path", defaults.output_path.to_string_lossy().into_owned())?
            .set_default("chunk_size", defaults.chunk_size as u64)?
            .set_default("window_size", defaults.window_size as u64)?
            .set_default("slow_threshold_ms", defaults.slow_threshold_ms)?;

        builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Reject sizes that cannot drive a run
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_size == 0 {
            return Err(PipelineError::InvalidArgument(
                "chunk size must be a positive integer".to_string(),
            ));
        }
        if self.window_size == 0 {
            return Err(PipelineError::InvalidArgument(
                "window size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
