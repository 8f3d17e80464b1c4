//! Pipeline orchestrator
//!
//! Drives one run through `Idle -> Loading -> Processing -> Finalizing -> Done`.
//! A load failure moves straight to `Failed` with no output; a chunk whose
//! features cannot be extracted is logged, skipped and left out of the table.

use crate::config::PipelineConfig;
use crate::error::{ChunkProcessingError, PipelineError};
use crate::io::{load_signal, save_features};
use crate::timing::{ScopedTimer, SlowCallLogger};
use feature_engine::{chunks, ChunkProcessor, FeatureRow};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Lifecycle state of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Loading,
    Processing,
    Finalizing,
    Done,
    Failed,
}

/// Result of processing a signal in memory
#[derive(Debug, Default)]
pub struct ProcessedSignal {
    /// One row per successfully processed chunk, in chunk order
    pub rows: Vec<FeatureRow>,
    /// Chunks that failed and were left out
    pub skipped: Vec<ChunkProcessingError>,
}

impl ProcessedSignal {
    pub fn total_chunks(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_chunks: usize,
    pub included_chunks: usize,
    pub skipped_chunks: usize,
    /// False when the table was empty and no file was produced
    pub output_written: bool,
    pub output_path: PathBuf,
}

/// Chunked feature-extraction pipeline
pub struct Pipeline {
    config: PipelineConfig,
    slow_calls: SlowCallLogger,
    state: PipelineState,
}

impl Pipeline {
    /// Create a pipeline, rejecting invalid sizes before anything runs
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            slow_calls: SlowCallLogger::new(config.slow_threshold_ms),
            config,
            state: PipelineState::Idle,
        })
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the input, process every chunk and write the feature table
    pub fn run(&mut self) -> Result<RunSummary, PipelineError> {
        let _timer = ScopedTimer::start("Full Pipeline Execution");
        info!(
            input = %self.config.input_path.display(),
            output = %self.config.output_path.display(),
            chunk_size = self.config.chunk_size,
            window_size = self.config.window_size,
            "Starting signal analysis pipeline"
        );

        self.state = PipelineState::Loading;
        let signal = match load_signal(&self.config.input_path) {
            Ok(signal) => signal,
            Err(err) => {
                self.state = PipelineState::Failed;
                error!("Data loading failed: {}. No output written.", err);
                return Err(err.into());
            }
        };
        info!("Total signal points loaded: {}", signal.len());

        let processed = match self.process_signal(&signal) {
            Ok(processed) => processed,
            Err(err) => {
                self.state = PipelineState::Failed;
                return Err(err);
            }
        };

        self.state = PipelineState::Finalizing;
        let output_written = match save_features(&self.config.output_path, &processed.rows) {
            Ok(written) => written,
            Err(source) => {
                self.state = PipelineState::Failed;
                let err = PipelineError::Write {
                    path: self.config.output_path.clone(),
                    source,
                };
                error!("{}", err);
                return Err(err);
            }
        };

        let summary = RunSummary {
            total_chunks: processed.total_chunks(),
            included_chunks: processed.rows.len(),
            skipped_chunks: processed.skipped.len(),
            output_written,
            output_path: self.config.output_path.clone(),
        };

        if summary.output_written {
            info!(
                "Pipeline completed: {} of {} chunks included, {} skipped. Features saved to {}",
                summary.included_chunks,
                summary.total_chunks,
                summary.skipped_chunks,
                summary.output_path.display()
            );
        } else {
            warn!(
                "Pipeline completed with no feature rows ({} chunks, {} skipped). No output written.",
                summary.total_chunks, summary.skipped_chunks
            );
        }

        self.state = PipelineState::Done;
        Ok(summary)
    }

    /// Chunk an in-memory signal and build the feature table with fresh window state
    pub fn process_signal(&mut self, signal: &[f64]) -> Result<ProcessedSignal, PipelineError> {
        self.state = PipelineState::Processing;

        let invalid = |e: feature_engine::FeatureError| PipelineError::InvalidArgument(e.to_string());
        let mut processor = ChunkProcessor::new(self.config.window_size).map_err(invalid)?;
        let mut processed = ProcessedSignal::default();

        for chunk in chunks(signal, self.config.chunk_size).map_err(invalid)? {
            let index = chunk.index;
            let result = self
                .slow_calls
                .time("process_chunk", || processor.process(chunk));

            match result {
                Ok(row) => processed.rows.push(row),
                Err(source) => {
                    let err = ChunkProcessingError { index, source };
                    error!("{}. Skipping chunk.", err);
                    processed.skipped.push(err);
                }
            }
        }

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(chunk_size: usize, window_size: usize) -> Pipeline {
        Pipeline::new(PipelineConfig {
            chunk_size,
            window_size,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_pipeline_is_idle() {
        assert_eq!(pipeline(4, 3).state(), PipelineState::Idle);
    }

    #[test]
    fn test_invalid_sizes_rejected_before_run() {
        let result = Pipeline::new(PipelineConfig {
            chunk_size: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(PipelineError::InvalidArgument(_))));
    }

    #[test]
    fn test_bad_chunk_is_skipped_with_original_index() {
        let mut p = pipeline(2, 2);
        let signal = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];

        let processed = p.process_signal(&signal).unwrap();

        let indices: Vec<usize> = processed.rows.iter().map(|r| r.chunk_index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(processed.skipped.len(), 1);
        assert_eq!(processed.skipped[0].index, 1);
        assert_eq!(processed.total_chunks(), 3);
        // Window skips the rejected chunk: [5, 6]
        assert_eq!(processed.rows[1].moving_avg_last, Some(5.5));
    }

    #[test]
    fn test_each_run_starts_with_fresh_windows() {
        let mut p = pipeline(2, 4);
        let first = p.process_signal(&[10.0, 10.0]).unwrap();
        let second = p.process_signal(&[2.0, 4.0]).unwrap();
        assert_eq!(first.rows[0].moving_avg_last, Some(10.0));
        assert_eq!(second.rows[0].moving_avg_last, Some(3.0));
    }
}
