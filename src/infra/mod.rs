// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Persistence concerns shared by the use cases:
//
//   artifact.rs — Writes encoded pieces to their split directory
//                 as JSON, deriving the artifact name from the
//                 source file name. Owns the train/val/test
//                 directory layout under the output root.
//
//   manifest.rs — Writes manifest.json at the output root after
//                 a successful run: the configuration that
//                 produced the dataset plus the per-split counts.
//
// Keeping these here keeps the application layer free of disk
// layout details, and lets tests point everything at a TempDir.

/// Split-directory layout and per-piece artifact writing
pub mod artifact;

/// Run manifest persistence
pub mod manifest;
