//! Signal Lab Pipeline
//!
//! Loads a sampled signal, splits it into fixed-size chunks, extracts
//! per-chunk features with moving-window smoothing and writes the feature
//! table as CSV.

pub mod config;
mod error;
pub mod generate;
pub mod io;
pub mod pipeline;
pub mod profile;
pub mod timing;

pub use config::PipelineConfig;
pub use error::{ChunkProcessingError, LoadError, PipelineError};
pub use pipeline::{Pipeline, PipelineState, ProcessedSignal, RunSummary};

use tracing_subscriber::EnvFilter;

/// Initialize logging, `RUST_LOG` overrides the default `info` level
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();
}
