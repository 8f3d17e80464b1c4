//! Scoped timing helpers for diagnostic logging

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Logs `START` when created and `END ... ms` when dropped
#[must_use = "the timer logs its duration when dropped"]
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        info!("START: {}...", label);
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        info!(
            "END: {} finished in {:.2} ms",
            self.label,
            millis(self.start.elapsed())
        );
    }
}

/// Times calls and warns when one exceeds a threshold
#[derive(Debug, Clone, Copy)]
pub struct SlowCallLogger {
    threshold_ms: Option<f64>,
}

impl SlowCallLogger {
    /// Warn for calls slower than `threshold_ms`
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms: Some(threshold_ms),
        }
    }

    /// Log every call at info level without a slow-call threshold
    pub fn unbounded() -> Self {
        Self { threshold_ms: None }
    }

    /// Run `f`, log its duration and pass its result through
    pub fn time<T>(&self, label: &str, f: impl FnOnce() -> T) -> T {
        self.time_with_elapsed(label, f).0
    }

    /// Run `f` and also return its duration
    pub fn time_with_elapsed<T>(&self, label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        let elapsed_ms = millis(elapsed);

        match self.threshold_ms {
            Some(threshold) if elapsed_ms > threshold => {
                warn!(
                    "SLOW CALL: '{}' ran in {:.2} ms. Threshold: {:.2} ms",
                    label, elapsed_ms, threshold
                );
            }
            Some(_) => debug!("'{}' ran in {:.2} ms", label, elapsed_ms),
            None => info!("'{}' ran in {:.2} ms", label, elapsed_ms),
        }

        (result, elapsed)
    }

    pub fn threshold_ms(&self) -> Option<f64> {
        self.threshold_ms
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_passes_through() {
        let logger = SlowCallLogger::new(1_000.0);
        assert_eq!(logger.time("add", || 2 + 2), 4);
    }

    #[test]
    fn test_elapsed_reported() {
        let logger = SlowCallLogger::new(0.0);
        let (value, elapsed) = logger.time_with_elapsed("sleep", || {
            std::thread::sleep(Duration::from_millis(2));
            "done"
        });
        assert_eq!(value, "done");
        assert!(elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_scoped_timer_measures() {
        let timer = ScopedTimer::start("block");
        std::thread::sleep(Duration::from_millis(1));
        assert!(timer.elapsed() >= Duration::from_millis(1));
    }
}
