//! Fixed-Size Signal Chunking

use crate::FeatureError;

/// A contiguous block of samples and its position in the chunk sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunk<'a, T> {
    /// Zero-based position of this chunk in the signal
    pub index: usize,
    /// Samples in signal order
    pub samples: &'a [T],
}

impl<T> Chunk<'_, T> {
    /// Number of samples in the chunk
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Chunks produced by [`chunks`] are never empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Lazy, single-pass iterator over consecutive chunks of a signal
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    remaining: &'a [T],
    size: usize,
    next_index: usize,
}

/// Split `signal` into consecutive chunks of `size` samples.
///
/// Every chunk except possibly the last holds exactly `size` samples; an empty
/// signal yields no chunks.
pub fn chunks<T>(signal: &[T], size: usize) -> Result<Chunks<'_, T>, FeatureError> {
    if size == 0 {
        return Err(FeatureError::InvalidChunkSize(size));
    }
    Ok(Chunks {
        remaining: signal,
        size,
        next_index: 0,
    })
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = Chunk<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let take = self.size.min(self.remaining.len());
        let (samples, rest) = self.remaining.split_at(take);
        self.remaining = rest;

        let index = self.next_index;
        self.next_index += 1;
        Some(Chunk { index, samples })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len().div_ceil(self.size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> std::iter::FusedIterator for Chunks<'_, T> {}
