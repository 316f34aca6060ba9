// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Validate split ratios      (Layer 3 - domain)
//   Step 2: Scan the corpus root       (Layer 4 - data)
//   Step 3: Seeded split assignment    (Layer 4 - data)
//   Step 4: Create split directories   (Layer 6 - infra)
//   Step 5: Encode and write pieces    (Layer 5 + 6)
//   Step 6: Save the run manifest      (Layer 6 - infra)
//
// Fail-fast throughout: the first scanner, encoder, or writer
// error aborts the run. Artifacts already written stay on disk
// (no rollback), and no manifest is written for a failed run.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::{scanner::MidiScanner, splitter::assign_splits};
use crate::domain::split::{RunSummary, SplitRatios};
use crate::domain::traits::{CorpusSource, PieceEncoder};
use crate::infra::{artifact::ArtifactWriter, manifest::RunManifest};
use crate::midi::encoder::MidiFileEncoder;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything a run needs. Serialisable so the manifest can record
// exactly what produced a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub root: String,
    pub output_dir: String,
    pub validation_fraction: f64,
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            root: "data/midi".to_string(),
            output_dir: "dataset/e_piano".to_string(),
            validation_fraction: 0.15,
            test_fraction: 0.15,
            seed: 42,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline end to end with the real MIDI encoder.
    pub fn execute(&self) -> Result<RunSummary> {
        self.execute_with(&MidiFileEncoder::new())
    }

    /// Execute the pipeline with a caller-provided encoder.
    /// This seam is what lets tests script encoder failures without
    /// crafting broken MIDI files.
    pub fn execute_with(&self, encoder: &dyn PieceEncoder) -> Result<RunSummary> {
        let cfg = &self.config;

        // ── Step 1: Validate ratios before touching the corpus ────────────────
        let ratios = SplitRatios::new(cfg.validation_fraction, cfg.test_fraction)?;

        // ── Step 2: Scan the corpus root ──────────────────────────────────────
        // Fatal on a missing root or a non-file .mid entry
        tracing::info!("Scanning corpus root '{}'", cfg.root);
        let scanner = MidiScanner::new(&cfg.root);
        let entries = scanner.scan()?;

        // ── Step 3: Seeded split assignment ───────────────────────────────────
        // The shuffle is the run's only randomized decision. The RNG
        // is built here, once, from the configured seed and handed to
        // the splitter; nothing else draws from it.
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let assignment = assign_splits(entries, &mut rng, &ratios);
        tracing::info!(
            "Assigned {} train, {} validation, {} test",
            assignment.train.len(),
            assignment.validation.len(),
            assignment.test.len()
        );

        // ── Step 4: Create the split directories ──────────────────────────────
        // Idempotent; pre-existing directories (and their files, which
        // colliding artifact names overwrite) are not an error
        let writer = ArtifactWriter::new(&cfg.output_dir);
        writer.create_split_dirs()?;

        // ── Step 5: Encode and write, split by split ──────────────────────────
        // Fixed split order: train, validation, test. Within a split,
        // post-shuffle order. The first failure propagates immediately.
        let mut summary = RunSummary::default();
        for (split, pieces) in assignment.iter() {
            tracing::info!("Processing {} {} pieces", pieces.len(), split.label());

            for entry in pieces {
                let encoded = encoder.encode(entry)?;
                writer.write(&encoded, split, entry)?;
                summary.record(split);
            }
        }

        // ── Step 6: Save the run manifest ─────────────────────────────────────
        let manifest = RunManifest {
            corpus_root: cfg.root.clone(),
            seed: cfg.seed,
            validation_fraction: cfg.validation_fraction,
            test_fraction: cfg.test_fraction,
            summary,
        };
        manifest.save(writer.output_root())?;

        Ok(summary)
    }
}
