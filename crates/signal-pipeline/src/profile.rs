//! RMS implementation comparison

use crate::generate::{generate_signal, GeneratorConfig};
use crate::timing::SlowCallLogger;
use feature_engine::{rms, rms_unrolled};
use std::time::Duration;
use tracing::info;

/// Timings and results of one profiling run
#[derive(Debug, Clone, Copy)]
pub struct ProfileReport {
    pub samples: usize,
    pub iterator_rms: f64,
    pub iterator_elapsed: Duration,
    pub unrolled_rms: f64,
    pub unrolled_elapsed: Duration,
}

impl ProfileReport {
    /// Iterator time divided by unrolled time
    pub fn speedup(&self) -> f64 {
        let unrolled = self.unrolled_elapsed.as_secs_f64();
        if unrolled > 0.0 {
            self.iterator_elapsed.as_secs_f64() / unrolled
        } else {
            f64::INFINITY
        }
    }
}

/// Time both RMS implementations over the same noise-only signal
pub fn profile_rms(samples: usize, seed: u64) -> ProfileReport {
    let data = generate_signal(&GeneratorConfig {
        samples,
        seed,
        amplitude: 0.0,
        ..Default::default()
    });

    info!("Comparing RMS calculation speed on {} data points", samples);
    let timer = SlowCallLogger::unbounded();
    let (iterator_rms, iterator_elapsed) = timer.time_with_elapsed("rms", || rms(&data));
    let (unrolled_rms, unrolled_elapsed) =
        timer.time_with_elapsed("rms_unrolled", || rms_unrolled(&data));

    let report = ProfileReport {
        samples,
        iterator_rms,
        iterator_elapsed,
        unrolled_rms,
        unrolled_elapsed,
    };
    info!("Unrolled speedup: {:.2}x", report.speedup());
    report
}
