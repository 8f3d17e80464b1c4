//! Per-Chunk Statistical Features

use ring_buffer::median;
use serde::{Deserialize, Serialize};

use crate::FeatureError;

/// Statistical features for one chunk of samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkFeatures {
    /// Root mean square
    pub rms: f64,
    /// Number of sign changes between adjacent samples
    pub zero_crossings: usize,
    /// Max minus min
    pub peak_to_peak: f64,
    /// Median absolute deviation from the median
    pub mad: f64,
}

impl ChunkFeatures {
    /// Compute features from a slice of samples.
    ///
    /// An empty slice yields all-zero features. Any NaN or infinite sample
    /// rejects the whole chunk.
    pub fn compute(values: &[f64]) -> Result<Self, FeatureError> {
        if let Some((offset, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FeatureError::NonFiniteSample { offset, value });
        }
        if values.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self {
            rms: rms(values),
            zero_crossings: zero_crossings(values),
            peak_to_peak: peak_to_peak(values),
            mad: median_absolute_deviation(values),
        })
    }
}

/// Root mean square, `sqrt(mean(x²))`
pub fn rms(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| v * v).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Root mean square accumulated over four independent lanes.
///
/// Same result as [`rms`] up to rounding; the split accumulators let the
/// compiler vectorise the inner loop.
pub fn rms_unrolled(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut lanes = [0.0f64; 4];
    let mut blocks = values.chunks_exact(4);
    for block in &mut blocks {
        for (lane, v) in lanes.iter_mut().zip(block) {
            *lane += v * v;
        }
    }
    let tail: f64 = blocks.remainder().iter().map(|v| v * v).sum();

    let sum_sq = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]) + tail;
    (sum_sq / values.len() as f64).sqrt()
}

fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Count sign changes between adjacent samples.
///
/// Sums `|sign(x[i+1]) - sign(x[i])|` and halves it, so `-1 -> 1` counts once
/// and `-1 -> 0 -> 1` also counts once.
pub fn zero_crossings(values: &[f64]) -> usize {
    let steps: u32 = values
        .windows(2)
        .map(|pair| (sign(pair[1]) - sign(pair[0])).unsigned_abs())
        .sum();
    (steps / 2) as usize
}

/// Difference between the largest and smallest sample
pub fn peak_to_peak(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

/// `median(|x - median(x)|)`
pub fn median_absolute_deviation(values: &[f64]) -> f64 {
    let mut scratch = values.to_vec();
    let Some(center) = median(&mut scratch) else {
        return 0.0;
    };
    for v in scratch.iter_mut() {
        *v = (*v - center).abs();
    }
    median(&mut scratch).unwrap_or(0.0)
}
