// ============================================================
// Layer 3 — Encoded Piece
// ============================================================
// The opaque output of the encoder for one file: a flat stream
// of integer event tokens. Produced once, written once, then
// dropped; never retained past a single file's processing step.

use serde::{Deserialize, Serialize};

/// One fully encoded piece: the event-token stream for a single
/// source MIDI file, plus the source name it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedPiece {
    /// File name of the source piece ("piece.mid"), kept for
    /// traceability so an artifact can be tied back to its input
    pub source: String,

    /// The encoded event tokens, in performance order
    pub events: Vec<u32>,
}

impl EncodedPiece {
    pub fn new(source: impl Into<String>, events: Vec<u32>) -> Self {
        Self {
            source: source.into(),
            events,
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
