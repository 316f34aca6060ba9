// ============================================================
// Layer 2 — Inspect Use Case
// ============================================================
// Loads one artifact written by `prepare` and summarises its
// token stream: how many events of each vocabulary category it
// holds. Useful for sanity-checking a freshly built dataset
// without deserialising it into a training run.

use anyhow::Result;
use std::path::PathBuf;

use crate::infra::artifact::ArtifactWriter;
use crate::midi::events::Event;

/// Per-category token counts for one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactReport {
    pub source: String,
    pub total_events: usize,
    pub note_on: usize,
    pub note_off: usize,
    pub time_shift: usize,
    pub velocity: usize,
    /// Tokens outside the vocabulary. Always zero for artifacts
    /// this tool wrote itself.
    pub unknown: usize,
}

pub struct InspectUseCase {
    artifact_path: PathBuf,
}

impl InspectUseCase {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }

    /// Load the artifact and tally its tokens by category.
    pub fn report(&self) -> Result<ArtifactReport> {
        let piece = ArtifactWriter::read_artifact(&self.artifact_path)?;

        let mut report = ArtifactReport {
            source: piece.source.clone(),
            total_events: piece.event_count(),
            ..ArtifactReport::default()
        };

        for &token in &piece.events {
            match Event::from_token(token) {
                Some(Event::NoteOn { .. }) => report.note_on += 1,
                Some(Event::NoteOff { .. }) => report.note_off += 1,
                Some(Event::TimeShift { .. }) => report.time_shift += 1,
                Some(Event::Velocity { .. }) => report.velocity += 1,
                None => report.unknown += 1,
            }
        }

        Ok(report)
    }
}
