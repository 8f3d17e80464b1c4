//! Feature Row Assembly

use crate::chunks::Chunk;
use crate::statistics::ChunkFeatures;
use crate::FeatureError;
use ring_buffer::{MovingAverage, MovingMedian};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Column names of a feature row, in output order
pub const FEATURE_COLUMNS: [&str; 8] = [
    "chunk_index",
    "chunk_size",
    "rms",
    "zero_crossings",
    "peak_to_peak",
    "mad",
    "moving_avg_last",
    "moving_med_last",
];

/// One output row per processed chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Position of the chunk in the signal
    pub chunk_index: usize,
    /// Number of samples in the chunk
    pub chunk_size: usize,
    pub rms: f64,
    pub zero_crossings: usize,
    pub peak_to_peak: f64,
    pub mad: f64,
    /// Moving average after the chunk's last sample
    pub moving_avg_last: Option<f64>,
    /// Moving median after the chunk's last sample
    pub moving_med_last: Option<f64>,
}

impl FeatureRow {
    /// CSV header line (no trailing newline)
    pub fn csv_header() -> String {
        FEATURE_COLUMNS.join(",")
    }

    /// CSV record for this row (no trailing newline); missing window values are empty fields
    pub fn to_csv_record(&self) -> String {
        let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

        format!(
            "{},{},{},{},{},{},{},{}",
            self.chunk_index,
            self.chunk_size,
            self.rms,
            self.zero_crossings,
            self.peak_to_peak,
            self.mad,
            optional(self.moving_avg_last),
            optional(self.moving_med_last),
        )
    }
}

/// Turns chunks into feature rows while carrying the moving windows across chunks
#[derive(Debug, Clone)]
pub struct ChunkProcessor {
    moving_average: MovingAverage,
    moving_median: MovingMedian,
}

impl ChunkProcessor {
    /// Create a processor with fresh moving windows of `window_size` samples
    pub fn new(window_size: usize) -> Result<Self, FeatureError> {
        Ok(Self {
            moving_average: MovingAverage::new(window_size)
                .map_err(|e| FeatureError::from_window(window_size, e))?,
            moving_median: MovingMedian::new(window_size)
                .map_err(|e| FeatureError::from_window(window_size, e))?,
        })
    }

    /// Process one chunk.
    ///
    /// Features are extracted first; only a chunk that extracts cleanly is fed
    /// into the moving windows, so a rejected chunk leaves window state as it was.
    pub fn process(&mut self, chunk: Chunk<'_, f64>) -> Result<FeatureRow, FeatureError> {
        let features = ChunkFeatures::compute(chunk.samples)?;

        for &sample in chunk.samples {
            self.moving_average.observe(sample);
            self.moving_median.observe(sample);
        }

        trace!(
            chunk_index = chunk.index,
            observed = self.moving_average.observed(),
            "Windows updated"
        );

        Ok(FeatureRow {
            chunk_index: chunk.index,
            chunk_size: chunk.len(),
            rms: features.rms,
            zero_crossings: features.zero_crossings,
            peak_to_peak: features.peak_to_peak,
            mad: features.mad,
            moving_avg_last: self.moving_average.current(),
            moving_med_last: self.moving_median.current(),
        })
    }

    /// Moving average window
    pub fn moving_average(&self) -> &MovingAverage {
        &self.moving_average
    }

    /// Moving median window
    pub fn moving_median(&self) -> &MovingMedian {
        &self.moving_median
    }
}
