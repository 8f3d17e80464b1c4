//! Signal Lab - command line entry point

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use signal_pipeline::generate::{generate_signal, GeneratorConfig};
use signal_pipeline::io::save_signal;
use signal_pipeline::profile::profile_rms;
use signal_pipeline::{init_logging, Pipeline, PipelineConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "signal-lab")]
#[command(about = "Signal Log Analyzer Toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Commands for signal processing
    #[command(subcommand)]
    Signal(SignalCommands),
    /// Generate the synthetic sine-plus-noise signal and save it
    GenerateData {
        /// Path to save the generated signal CSV file
        #[arg(long, short, default_value = "data/signal.csv")]
        output: PathBuf,
        /// Number of samples
        #[arg(long, default_value_t = GeneratorConfig::default().samples)]
        samples: usize,
        /// RNG seed
        #[arg(long, default_value_t = GeneratorConfig::default().seed)]
        seed: u64,
    },
    /// Compare the two RMS implementations on random data
    Profile {
        #[arg(long, default_value_t = 1_000_000)]
        samples: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Subcommand, Debug)]
enum SignalCommands {
    /// Load a signal, stream it in chunks, extract features and save the result
    RunPipeline(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to the input signal CSV file
    #[arg(long = "input", short = 'i')]
    input: Option<PathBuf>,
    /// Path to save the output features CSV
    #[arg(long = "output", short = 'o')]
    output: Option<PathBuf>,
    /// Samples per chunk
    #[arg(long)]
    chunk_size: Option<usize>,
    /// Samples per moving window
    #[arg(long)]
    window_size: Option<usize>,
    /// Per-chunk slow call threshold in milliseconds
    #[arg(long)]
    slow_threshold_ms: Option<f64>,
    /// Configuration file (defaults to ./signal-lab.toml if present)
    #[arg(long, env = "SIGNAL_LAB_CONFIG")]
    config: Option<PathBuf>,
}

impl RunArgs {
    fn into_config(self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::load(self.config.as_deref())
            .context("failed to load pipeline configuration")?;

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(threshold) = self.slow_threshold_ms {
            config.slow_threshold_ms = threshold;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signal(SignalCommands::RunPipeline(args)) => {
            let config = args.into_config()?;
            let mut pipeline = Pipeline::new(config)?;
            pipeline.run().context("pipeline run failed")?;
        }
        Commands::GenerateData {
            output,
            samples,
            seed,
        } => {
            info!("Generating synthetic signal data");
            let signal = generate_signal(&GeneratorConfig {
                samples,
                seed,
                ..Default::default()
            });
            save_signal(&output, &signal)
                .with_context(|| format!("failed to save data to {}", output.display()))?;
            info!(
                "Successfully generated and saved {} data points to: {}",
                signal.len(),
                output.display()
            );
        }
        Commands::Profile { samples, seed } => {
            let report = profile_rms(samples, seed);
            println!(
                "rms: {:.6} in {:.3} ms | rms_unrolled: {:.6} in {:.3} ms | speedup {:.2}x",
                report.iterator_rms,
                report.iterator_elapsed.as_secs_f64() * 1000.0,
                report.unrolled_rms,
                report.unrolled_elapsed.as_secs_f64() * 1000.0,
                report.speedup()
            );
        }
    }
    Ok(())
}
