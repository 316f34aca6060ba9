// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — partitions and encodes a MIDI corpus
//   2. `inspect` — summarises one written artifact

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "midi-dataset-prep",
    version = "0.1.0",
    about = "Partition a MIDI corpus into train/val/test splits and encode it for model training."
)]
pub struct Cli {
    /// The subcommand to run (prepare or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Preprocessing MIDI files from: {}", args.root);
        println!("Preprocessing midi files and saving to {}", args.output_dir);

        let use_case = PrepareUseCase::new(args.into());
        let summary = use_case.execute()?;

        println!("Num Train: {}", summary.train);
        println!("Num Val: {}", summary.validation);
        println!("Num Test: {}", summary.test);
        println!("Done!");
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Loads the artifact and prints its token statistics.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let report = InspectUseCase::new(&args.artifact).report()?;

        println!("Source: {}", report.source);
        println!("Total events: {}", report.total_events);
        println!("  note-on:    {}", report.note_on);
        println!("  note-off:   {}", report.note_off);
        println!("  time-shift: {}", report.time_shift);
        println!("  velocity:   {}", report.velocity);
        if report.unknown > 0 {
            println!("  unknown:    {}", report.unknown);
        }
        Ok(())
    }
}
