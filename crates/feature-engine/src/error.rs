//! Feature Extraction Error Types

use ring_buffer::RingBufferError;
use thiserror::Error;

/// Errors raised while chunking a signal or extracting features from a chunk
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Chunk size must be at least one sample
    #[error("Chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    /// Window size must be at least one sample
    #[error("Window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    /// Sample is NaN or infinite
    #[error("Non-finite sample {value} at offset {offset}")]
    NonFiniteSample { offset: usize, value: f64 },
}

impl FeatureError {
    pub(crate) fn from_window(window_size: usize, err: RingBufferError) -> Self {
        match err {
            RingBufferError::ZeroCapacity => FeatureError::InvalidWindowSize(window_size),
        }
    }
}
