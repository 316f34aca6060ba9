// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// Records what a finished run did: the configuration that
// produced the dataset (corpus root, seed, split fractions) and
// the per-split artifact counts. Written as manifest.json at the
// output root after the last artifact, so its presence also marks
// a run that completed; a failed run leaves no manifest.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::split::RunSummary;

/// File name of the manifest under the output root
const MANIFEST_NAME: &str = "manifest.json";

/// The persisted record of one preparation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// Corpus root the run read from
    pub corpus_root: String,

    /// Seed that drove the shuffle; rerunning with this seed over
    /// the same listing order reproduces the same assignment
    pub seed: u64,

    /// Fraction of the corpus assigned to validation
    pub validation_fraction: f64,

    /// Fraction of the corpus assigned to test
    pub test_fraction: f64,

    /// Artifacts written per split
    pub summary: RunSummary,
}

impl RunManifest {
    /// Write the manifest as pretty JSON under the output root
    pub fn save(&self, output_root: &Path) -> Result<()> {
        let path = output_root.join(MANIFEST_NAME);

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved run manifest to '{}'", path.display());
        Ok(())
    }

    /// Load a manifest written by a previous run
    pub fn load(output_root: &Path) -> Result<Self> {
        let path = output_root.join(MANIFEST_NAME);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();

        let manifest = RunManifest {
            corpus_root: "corpus".to_string(),
            seed: 42,
            validation_fraction: 0.15,
            test_fraction: 0.15,
            summary: RunSummary {
                train: 6,
                validation: 2,
                test: 2,
            },
        };
        manifest.save(dir.path()).unwrap();

        let loaded = RunManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.seed, 42);
        assert_eq!(loaded.summary.total(), 10);
        assert_eq!(loaded.corpus_root, "corpus");
    }

    #[test]
    fn test_load_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(RunManifest::load(dir.path()).is_err());
    }
}
