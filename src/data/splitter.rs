// ============================================================
// Layer 4 — Split Assigner
// ============================================================
// Shuffles the discovered corpus and partitions it into the three
// groups:
//   - Training set:   the remainder after validation and test
//   - Validation set: first round(n * validation_fraction) entries
//   - Test set:       next round(n * test_fraction) entries
//
// The shuffle is a Fisher-Yates permutation via
// rand::seq::SliceRandom, driven by a caller-provided seeded RNG.
// The RNG is an explicit parameter, never thread_rng() or global
// state: the same seed and the same input order always reproduce
// the same assignment, and tests can pin both.
//
// Rounding rule: f64::round, i.e. half-away-from-zero
// (1.5 → 2, 2.5 → 3). Applied identically to both fractions.
//
// Reference: rand crate documentation (SliceRandom)

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entry::FileEntry;
use crate::domain::split::{SplitAssignment, SplitRatios};

/// Shuffle `entries` with the given RNG and partition them into
/// train/validation/test according to `ratios`.
///
/// Pure function of (entries, rng state, ratios): no I/O, no
/// global state. Consumes the entry list; every entry ends up in
/// exactly one of the three groups.
pub fn assign_splits(
    mut entries: Vec<FileEntry>,
    rng: &mut impl Rng,
    ratios: &SplitRatios,
) -> SplitAssignment {
    // Fisher-Yates shuffle: every permutation equally likely,
    // reproducible for a fixed seed and fixed input order
    entries.shuffle(rng);

    let total = entries.len();
    let n_validation = ((total as f64) * ratios.validation()).round() as usize;
    let n_test = ((total as f64) * ratios.test()).round() as usize;

    // Clamp so the slices below can never overrun the list, even if
    // rounding both fractions up overshoots the total
    let n_validation = n_validation.min(total);
    let n_test = n_test.min(total - n_validation);

    // split_off(n) removes elements [n..] and returns them.
    // After the first call:  entries = validation, rest = the tail.
    // After the second call: rest = test, train = whatever is left.
    let mut rest = entries.split_off(n_validation);
    let train = rest.split_off(n_test);

    tracing::debug!(
        "Split assignment: {} train, {} validation, {} test",
        train.len(),
        entries.len(),
        rest.len(),
    );

    SplitAssignment {
        train,
        validation: entries,
        test: rest,
    }
}
