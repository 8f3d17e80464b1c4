//! Moving-Window Accumulators
//!
//! A [`MovingWindow`] keeps the most recent `window_size` samples in a
//! [`RingBuffer`] and reduces them to a single statistic on demand. Mean and
//! median share the same eviction path and differ only in their [`Reduction`].

use crate::{RingBuffer, RingBufferError};

/// Reduction applied to the retained history of a moving window
pub trait Reduction {
    /// Reduce a non-empty history (oldest first) to one value
    fn reduce(&self, history: &RingBuffer<f64>) -> f64;
}

/// Arithmetic mean of the window
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Reduction for Mean {
    fn reduce(&self, history: &RingBuffer<f64>) -> f64 {
        history.iter().sum::<f64>() / history.len() as f64
    }
}

/// Median of the window, even lengths average the two middle values
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Reduction for Median {
    fn reduce(&self, history: &RingBuffer<f64>) -> f64 {
        let mut values = history.to_vec();
        median(&mut values).unwrap_or(0.0)
    }
}

/// Median of a slice, sorting it in place. `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Stateful moving statistic over the last `window_size` observed samples
#[derive(Debug, Clone)]
pub struct MovingWindow<R> {
    history: RingBuffer<f64>,
    reduction: R,
}

/// Moving arithmetic mean
pub type MovingAverage = MovingWindow<Mean>;

/// Moving median
pub type MovingMedian = MovingWindow<Median>;

impl<R: Reduction + Default> MovingWindow<R> {
    /// Create an empty window holding at most `window_size` samples
    pub fn new(window_size: usize) -> Result<Self, RingBufferError> {
        Self::with_reduction(window_size, R::default())
    }
}

impl<R: Reduction> MovingWindow<R> {
    /// Create an empty window with an explicit reduction
    pub fn with_reduction(window_size: usize, reduction: R) -> Result<Self, RingBufferError> {
        Ok(Self {
            history: RingBuffer::new(window_size)?,
            reduction,
        })
    }

    /// Observe one sample, evicting the oldest once the window is full
    pub fn observe(&mut self, sample: f64) {
        self.history.push(sample);
    }

    /// Current statistic, `None` before the first sample
    pub fn current(&self) -> Option<f64> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.reduction.reduce(&self.history))
        }
    }

    /// Retained samples, oldest first
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Configured window size
    pub fn window_size(&self) -> usize {
        self.history.capacity()
    }

    /// Number of samples observed over the window's lifetime
    pub fn observed(&self) -> usize {
        self.history.total_written()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_window_has_no_value() {
        let avg = MovingAverage::new(3).unwrap();
        let med = MovingMedian::new(3).unwrap();
        assert_eq!(avg.current(), None);
        assert_eq!(med.current(), None);
    }

    #[test]
    fn test_moving_average_trims_to_window() {
        let mut avg = MovingAverage::new(3).unwrap();
        for v in 1..=4 {
            avg.observe(v as f64);
        }
        // Window holds [2, 3, 4]
        assert_eq!(avg.current(), Some(3.0));
        assert_eq!(avg.history().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(avg.observed(), 4);
    }

    #[test]
    fn test_moving_median_even_length_averages() {
        let mut med = MovingMedian::new(4).unwrap();
        for v in [5.0, 1.0, 4.0, 2.0] {
            med.observe(v);
        }
        assert_eq!(med.current(), Some(3.0));
    }

    #[test]
    fn test_moving_median_evicts_by_recency_not_value() {
        let mut med = MovingMedian::new(3).unwrap();
        for v in [100.0, 1.0, 2.0, 3.0] {
            med.observe(v);
        }
        // The large first sample leaves first even though it is the maximum
        assert_eq!(med.history().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        assert_eq!(med.current(), Some(2.0));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(MovingAverage::new(0).is_err());
        assert!(MovingMedian::new(0).is_err());
    }

    #[test]
    fn test_median_helper() {
        assert_eq!(median(&mut []), None);
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    proptest! {
        #[test]
        fn history_is_last_window_samples(
            samples in prop::collection::vec(-1.0e6f64..1.0e6, 0..200),
            window in 1usize..20,
        ) {
            let mut avg = MovingAverage::new(window).unwrap();
            for (i, &s) in samples.iter().enumerate() {
                avg.observe(s);
                let start = (i + 1).saturating_sub(window);
                let expected = &samples[start..=i];
                let history: Vec<f64> = avg.history().collect();
                prop_assert!(history.len() <= window);
                prop_assert_eq!(history.as_slice(), expected);
            }
        }

        #[test]
        fn mean_and_median_share_history(
            samples in prop::collection::vec(-1.0e3f64..1.0e3, 1..100),
            window in 1usize..10,
        ) {
            let mut avg = MovingAverage::new(window).unwrap();
            let mut med = MovingMedian::new(window).unwrap();
            for &s in &samples {
                avg.observe(s);
                med.observe(s);
                prop_assert_eq!(avg.history().collect::<Vec<_>>(), med.history().collect::<Vec<_>>());
            }
        }
    }
}
