// ============================================================
// Layer 3 — Split Types
// ============================================================
// Everything about the three-way train/validation/test partition:
//
//   Split           — which of the three groups a piece lands in
//   SplitRatios     — validated validation/test fractions
//   SplitAssignment — the immutable partition produced once per run
//   RunSummary      — per-split success counters
//
// Split is a closed enum with exactly three variants, so an
// "unrecognized split" is unrepresentable rather than a runtime
// check somewhere in the pipeline.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::entry::FileEntry;

// ─── Split ────────────────────────────────────────────────────────────────────
/// One of the three dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// The fixed processing order: train, then validation, then test.
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    /// Directory name under the output root for this split
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "val",
            Split::Test => "test",
        }
    }

    /// Human-readable name used in progress output
    pub fn label(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

// ─── SplitRatios ──────────────────────────────────────────────────────────────
/// Validated split fractions. The train fraction is implicit:
/// whatever remains after validation and test are taken.
///
/// Constructed only through `new`, which rejects invalid ratios
/// before any scanning or encoding work starts.
#[derive(Debug, Clone, Copy)]
pub struct SplitRatios {
    validation: f64,
    test: f64,
}

impl SplitRatios {
    /// Build a SplitRatios, rejecting anything outside
    /// `0 <= v`, `0 <= t`, `v + t <= 1`.
    pub fn new(validation: f64, test: f64) -> Result<Self> {
        if !validation.is_finite() || !test.is_finite() {
            bail!("Split fractions must be finite numbers");
        }
        if validation < 0.0 || test < 0.0 {
            bail!(
                "Split fractions must be non-negative (got validation={}, test={})",
                validation,
                test
            );
        }
        if validation + test > 1.0 {
            bail!(
                "validation + test fractions must not exceed 1.0 (got {} + {} = {})",
                validation,
                test,
                validation + test
            );
        }

        Ok(Self { validation, test })
    }

    pub fn validation(&self) -> f64 {
        self.validation
    }

    pub fn test(&self) -> f64 {
        self.test
    }
}

// ─── SplitAssignment ──────────────────────────────────────────────────────────
/// The partition of the corpus into exactly three groups.
///
/// Created once per run by the split assigner and never mutated
/// afterwards. The three vectors are pairwise disjoint and together
/// hold every discovered entry; each is in post-shuffle order, which
/// is also the order the pipeline processes it in.
#[derive(Debug, Clone, Default)]
pub struct SplitAssignment {
    pub train: Vec<FileEntry>,
    pub validation: Vec<FileEntry>,
    pub test: Vec<FileEntry>,
}

impl SplitAssignment {
    pub fn total(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }

    /// Iterate the partitions in the fixed processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Split, &[FileEntry])> + '_ {
        [
            (Split::Train, self.train.as_slice()),
            (Split::Validation, self.validation.as_slice()),
            (Split::Test, self.test.as_slice()),
        ]
        .into_iter()
    }
}

// ─── RunSummary ───────────────────────────────────────────────────────────────
/// Per-split counts of successfully written artifacts.
/// Created fresh each run and reported at the end; a failed run
/// terminates without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

impl RunSummary {
    /// Count one successfully written artifact for the given split
    pub fn record(&mut self, split: Split) {
        match split {
            Split::Train => self.train += 1,
            Split::Validation => self.validation += 1,
            Split::Test => self.test += 1,
        }
    }

    pub fn count(&self, split: Split) -> usize {
        match split {
            Split::Train => self.train,
            Split::Validation => self.validation,
            Split::Test => self.test,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}
