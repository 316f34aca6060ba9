// ============================================================
// Layer 5 — MIDI Encoding Layer (midly)
// ============================================================
// This layer contains ALL midly-specific code. No other layer
// imports from midly, only this one: the rest of the pipeline
// sees MIDI files exclusively through the PieceEncoder trait.
//
// What's in this layer:
//
//   events.rs  — The performance-event vocabulary
//                388 tokens covering note-on, note-off,
//                time-shift (10 ms steps) and velocity bins,
//                with token <-> event conversion both ways
//
//   encoder.rs — The file encoder
//                Parses an SMF, merges all tracks onto absolute
//                ticks, converts ticks to wall-clock time via the
//                tempo map, and walks the note stream emitting
//                vocabulary tokens

/// The 388-token performance-event vocabulary
pub mod events;

/// Encodes one .mid file into an EncodedPiece
pub mod encoder;
