//! perceptron-lab · terminal trainer
//!
//! Runs one paced training session over a built-in dataset and prints the
//! weights at every epoch boundary.
//!
//! Run with:
//!   cargo run -- --dataset or --learning-rate 1.0 --speed 4
//! Set `RUST_LOG=perceptron_lab=trace` to see every sample evaluation.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use perceptron_lab::{
    list_datasets, Engine, EngineConfig, RunSnapshot, Status, TickOutcome,
};

/// Train a single perceptron step by step on a toy dataset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in dataset to train on (see --list)
    #[arg(long, default_value = "and")]
    dataset: String,

    /// Learning rate, must be > 0
    #[arg(long, default_value = "0.5")]
    learning_rate: f64,

    /// Animation speed multiplier; the tick delay is base_delay_ms / speed
    #[arg(long, default_value = "1.0")]
    speed: f64,

    /// JSON file with `max_epochs` and/or `base_delay_ms`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the epoch ceiling
    #[arg(long)]
    max_epochs: Option<usize>,

    /// Override the pacing baseline in milliseconds
    #[arg(long)]
    base_delay_ms: Option<u64>,

    /// Tick as fast as possible instead of sleeping between steps
    #[arg(long, default_value = "false")]
    no_delay: bool,

    /// Write the final snapshot as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the available datasets and exit
    #[arg(long, default_value = "false")]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> perceptron_lab::Result<()> {
    if args.list {
        for name in list_datasets() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => EngineConfig::load_json(path)?,
        None => EngineConfig::default(),
    };
    if let Some(max_epochs) = args.max_epochs {
        config.max_epochs = max_epochs;
    }
    if let Some(base_delay_ms) = args.base_delay_ms {
        config.base_delay_ms = base_delay_ms;
    }

    let (tx, rx) = mpsc::channel::<RunSnapshot>();
    let engine = Engine::new(config)?.with_observer(tx);
    let mut run = engine.load(&args.dataset, args.learning_rate)?;
    engine.set_animation_speed(&mut run, args.speed)?;

    println!(
        "Training on `{}` (lr = {}, max epochs = {})",
        args.dataset,
        run.learning_rate(),
        run.max_epochs()
    );

    let mut last_epoch = 0;
    let mut token = engine.start(&mut run);
    loop {
        let outcome = engine.tick(&mut run, token);
        for snap in rx.try_iter() {
            if snap.epoch > last_epoch {
                last_epoch = snap.epoch;
                print_epoch(&snap);
            }
        }
        match outcome {
            TickOutcome::Continue { token: next, delay } => {
                token = next;
                if !args.no_delay {
                    std::thread::sleep(delay);
                }
            }
            TickOutcome::Finished(_) | TickOutcome::Discarded => break,
        }
    }

    let w = run.weights();
    match run.status() {
        Status::Converged => println!("Converged after {} epochs.", run.epoch()),
        status => println!("Stopped after {} epochs ({status:?}).", run.epoch()),
    }
    println!("Final weights: w1 = {:.4}, w2 = {:.4}, bias = {:.4}", w.w1, w.w2, w.bias);
    match (w.boundary_x2(0.0), w.boundary_x2(1.0)) {
        (Some(a), Some(b)) => println!("Boundary: x2 = {a:.4} at x1 = 0, x2 = {b:.4} at x1 = 1"),
        _ => match w.boundary_x1(0.0) {
            Some(x1) => println!("Boundary: vertical line x1 = {x1:.4} (w2 = 0)"),
            None => println!("Boundary: undefined (w1 = w2 = 0)"),
        },
    }
    for s in run.dataset().samples() {
        println!(
            "  #{} ({:.1}, {:.1}) target {} -> output {}",
            s.row, s.x1, s.x2, s.target, s.output
        );
    }

    if let Some(path) = &args.export {
        engine.export_snapshot(&run).save_json(path)?;
        println!("Snapshot written to {}", path.display());
    }
    Ok(())
}

fn print_epoch(snap: &RunSnapshot) {
    let errors: u32 = snap.samples.iter().map(|s| s.error.unsigned_abs() as u32).sum();
    println!(
        "Epoch {:>3}: w1 = {:>7.3}, w2 = {:>7.3}, bias = {:>7.3}, errors = {}",
        snap.epoch, snap.weights.w1, snap.weights.w2, snap.weights.bias, errors
    );
}
