//! Feature Engineering Engine
//!
//! Splits a signal into fixed-size chunks and turns each chunk into a row of
//! statistical features plus moving-window smoothing carried across chunks.

mod chunks;
mod error;
mod features;
mod statistics;

pub use chunks::{chunks, Chunk, Chunks};
pub use error::FeatureError;
pub use features::{ChunkProcessor, FeatureRow, FEATURE_COLUMNS};
pub use statistics::{
    median_absolute_deviation, peak_to_peak, rms, rms_unrolled, zero_crossings, ChunkFeatures,
};
