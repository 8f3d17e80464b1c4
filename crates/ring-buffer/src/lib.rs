//! Bounded Ring Buffer
//!
//! Provides a fixed-capacity FIFO buffer and the moving mean/median windows
//! built on top of it.

mod buffer;
mod window;

pub use buffer::RingBuffer;
pub use window::{median, Mean, Median, MovingAverage, MovingMedian, MovingWindow, Reduction};

use thiserror::Error;

/// Errors raised when constructing a buffer or window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// Capacity (window size) must be at least one
    #[error("Capacity must be at least 1")]
    ZeroCapacity,
}
