// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`
// and all their configurable flags.
//
// clap's derive macros generate the help text, the error
// messages for missing args, and the string → usize/f64
// conversions.

use crate::application::prepare_use_case::PrepareConfig;
use clap::{Args, Subcommand};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition a MIDI corpus into train/val/test and encode it
    Prepare(PrepareArgs),

    /// Report token statistics for one written artifact
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Root folder containing the .mid corpus (non-recursive)
    pub root: String,

    /// Output folder for the preprocessed dataset
    #[arg(long, default_value = "dataset/e_piano")]
    pub output_dir: String,

    /// Fraction of the corpus held out for validation
    #[arg(long, default_value_t = 0.15)]
    pub validation_fraction: f64,

    /// Fraction of the corpus held out for test
    #[arg(long, default_value_t = 0.15)]
    pub test_fraction: f64,

    /// Seed for the split shuffle. The same seed over an unchanged
    /// corpus reproduces the same assignment.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            root: a.root,
            output_dir: a.output_dir,
            validation_fraction: a.validation_fraction,
            test_fraction: a.test_fraction,
            seed: a.seed,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a .json artifact written by `prepare`
    #[arg(long)]
    pub artifact: String,
}
