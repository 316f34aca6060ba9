// ============================================================
// Layer 5 — MIDI File Encoder
// ============================================================
// Turns one .mid file into its performance-event token stream.
//
// Steps:
//   1. Parse the SMF with midly (zero-copy over the raw bytes)
//   2. Merge every track onto absolute ticks, collecting tempo
//      meta-events and note boundaries
//   3. Convert ticks to wall-clock milliseconds via the tempo map
//      (500 000 µs per beat until the first tempo event, per the
//      SMF default)
//   4. Walk the time-ordered note stream emitting time-shift,
//      velocity, note-on and note-off tokens
//
// A note-on with velocity 0 is treated as a note-off, matching
// the running-status idiom most sequencers emit.
//
// Unsupported inputs (SMPTE timecode division, zero ticks per
// beat, trackless files) and parse failures are encoder errors;
// the pipeline treats them as fatal.

use anyhow::{anyhow, bail, Context, Result};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use std::fs;

use crate::domain::entry::FileEntry;
use crate::domain::record::EncodedPiece;
use crate::domain::traits::PieceEncoder;
use crate::midi::events::{Event, TIME_SHIFT_STEPS, TIME_STEP_MS};

/// Encodes .mid files into performance-event token streams.
/// Implements the PieceEncoder trait from the domain layer.
pub struct MidiFileEncoder;

impl MidiFileEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MidiFileEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceEncoder for MidiFileEncoder {
    fn encode(&self, entry: &FileEntry) -> Result<EncodedPiece> {
        let bytes = fs::read(&entry.path)
            .with_context(|| format!("Cannot read '{}'", entry.path.display()))?;

        let smf = Smf::parse(&bytes)
            .map_err(|e| anyhow!("Malformed MIDI file '{}': {}", entry.path.display(), e))?;

        let events = encode_smf(&smf)
            .with_context(|| format!("Cannot encode '{}'", entry.path.display()))?;

        tracing::debug!(
            "Encoded '{}' into {} events",
            entry.file_name,
            events.len()
        );
        Ok(EncodedPiece::new(entry.file_name.clone(), events))
    }
}

/// One note boundary with its wall-clock position
struct NoteBoundary {
    ms: u64,
    on: bool,
    pitch: u8,
    velocity: u8,
}

/// Encode an already-parsed SMF into the token stream
fn encode_smf(smf: &Smf) -> Result<Vec<u32>> {
    let ticks_per_beat = match smf.header.timing {
        Timing::Metrical(tpb) => u64::from(tpb.as_int()),
        Timing::Timecode(..) => bail!("SMPTE timecode timing is not supported"),
    };
    if ticks_per_beat == 0 {
        bail!("MIDI header declares zero ticks per beat");
    }
    if smf.tracks.is_empty() {
        bail!("MIDI file contains no tracks");
    }

    // Merge all tracks onto absolute ticks
    let mut tempo_changes: Vec<(u64, u32)> = Vec::new();
    let mut notes: Vec<(u64, bool, u8, u8)> = Vec::new();

    for track in &smf.tracks {
        let mut tick = 0u64;
        for event in track {
            tick += u64::from(event.delta.as_int());
            match event.kind {
                TrackEventKind::Meta(MetaMessage::Tempo(us_per_beat)) => {
                    tempo_changes.push((tick, us_per_beat.as_int()));
                }
                TrackEventKind::Midi { message, .. } => match message {
                    MidiMessage::NoteOn { key, vel } => {
                        let on = vel.as_int() > 0;
                        notes.push((tick, on, key.as_int(), vel.as_int()));
                    }
                    MidiMessage::NoteOff { key, vel } => {
                        notes.push((tick, false, key.as_int(), vel.as_int()));
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    tempo_changes.sort_by_key(|&(tick, _)| tick);
    let clock = TempoMap::new(ticks_per_beat, tempo_changes);

    // Wall-clock every boundary, then order the merged stream.
    // At equal times, note-offs sort before note-ons so a re-struck
    // pitch releases before it sounds again.
    let mut timed: Vec<NoteBoundary> = notes
        .into_iter()
        .map(|(tick, on, pitch, velocity)| NoteBoundary {
            ms: clock.tick_to_ms(tick),
            on,
            pitch,
            velocity,
        })
        .collect();
    timed.sort_by_key(|b| (b.ms, b.on, b.pitch));

    // Emit tokens
    let mut tokens = Vec::new();
    let mut current_step = 0u64;
    let mut current_bin: Option<u8> = None;

    for boundary in &timed {
        let step = boundary.ms / TIME_STEP_MS;
        push_time_shift(&mut tokens, step - current_step);
        current_step = step;

        if boundary.on {
            let bin = Event::velocity_bin(boundary.velocity);
            if current_bin != Some(bin) {
                tokens.push(Event::Velocity { bin }.token());
                current_bin = Some(bin);
            }
            tokens.push(Event::NoteOn { pitch: boundary.pitch }.token());
        } else {
            tokens.push(Event::NoteOff { pitch: boundary.pitch }.token());
        }
    }

    Ok(tokens)
}

/// Emit time-shift tokens covering `steps` 10 ms steps.
/// One token covers at most 100 steps; longer gaps chain tokens.
/// A zero-length gap emits nothing.
fn push_time_shift(tokens: &mut Vec<u32>, mut steps: u64) {
    while steps > 0 {
        let chunk = steps.min(u64::from(TIME_SHIFT_STEPS));
        tokens.push(Event::TimeShift { steps: chunk as u32 }.token());
        steps -= chunk;
    }
}

/// Piecewise tick→milliseconds conversion following the tempo map.
struct TempoMap {
    /// (start tick, µs elapsed at start tick, µs per tick from here)
    segments: Vec<(u64, f64, f64)>,
}

impl TempoMap {
    /// Build from sorted (tick, µs per beat) tempo changes.
    /// Runs at the SMF default of 500 000 µs per beat (120 BPM)
    /// until the first change.
    fn new(ticks_per_beat: u64, changes: Vec<(u64, u32)>) -> Self {
        let mut segments: Vec<(u64, f64, f64)> = Vec::with_capacity(changes.len() + 1);

        let mut prev_tick = 0u64;
        let mut elapsed_us = 0.0f64;
        let mut us_per_tick = 500_000.0 / ticks_per_beat as f64;
        segments.push((0, 0.0, us_per_tick));

        for (tick, us_per_beat) in changes {
            elapsed_us += (tick - prev_tick) as f64 * us_per_tick;
            us_per_tick = f64::from(us_per_beat) / ticks_per_beat as f64;

            // A change at the same tick as the previous segment
            // replaces it; the last tempo written wins
            if segments.last().map(|s| s.0) == Some(tick) {
                segments.pop();
            }
            segments.push((tick, elapsed_us, us_per_tick));
            prev_tick = tick;
        }

        Self { segments }
    }

    fn tick_to_ms(&self, tick: u64) -> u64 {
        // Segments are sorted and always start at tick 0, so the
        // last segment at-or-before `tick` is the active one
        let mut active = (0u64, 0.0f64, 0.0f64);
        for &segment in &self.segments {
            if segment.0 <= tick {
                active = segment;
            } else {
                break;
            }
        }

        let (start_tick, start_us, us_per_tick) = active;
        let us = start_us + (tick - start_tick) as f64 * us_per_tick;
        (us / 1000.0).round() as u64
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use midly::{Format, Header, TrackEvent};
    use std::fs;
    use tempfile::TempDir;

    const TPB: u16 = 480;

    fn note_on(delta: u32, pitch: u8, velocity: u8) -> TrackEvent<'static> {
        TrackEvent {
            delta: delta.into(),
            kind: TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOn {
                    key: pitch.into(),
                    vel: velocity.into(),
                },
            },
        }
    }

    fn note_off(delta: u32, pitch: u8) -> TrackEvent<'static> {
        TrackEvent {
            delta: delta.into(),
            kind: TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOff {
                    key: pitch.into(),
                    vel: 0.into(),
                },
            },
        }
    }

    fn tempo(delta: u32, us_per_beat: u32) -> TrackEvent<'static> {
        TrackEvent {
            delta: delta.into(),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(us_per_beat.into())),
        }
    }

    fn end_of_track() -> TrackEvent<'static> {
        TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        }
    }

    fn smf(tracks: Vec<Vec<TrackEvent<'static>>>) -> Smf<'static> {
        Smf {
            header: Header {
                format: Format::Parallel,
                timing: Timing::Metrical(TPB.into()),
            },
            tracks,
        }
    }

    #[test]
    fn test_single_note_tokens() {
        // 480 ticks at the default 120 BPM = 0.5 s = 50 steps
        let smf = smf(vec![vec![
            note_on(0, 60, 64),
            note_off(480, 60),
            end_of_track(),
        ]]);
        let tokens = encode_smf(&smf).unwrap();

        assert_eq!(
            tokens,
            vec![
                Event::Velocity { bin: 16 }.token(),
                Event::NoteOn { pitch: 60 }.token(),
                Event::TimeShift { steps: 50 }.token(),
                Event::NoteOff { pitch: 60 }.token(),
            ]
        );
    }

    #[test]
    fn test_note_on_velocity_zero_is_note_off() {
        let with_real_off = smf(vec![vec![
            note_on(0, 60, 64),
            note_off(480, 60),
            end_of_track(),
        ]]);
        let with_zero_velocity = smf(vec![vec![
            note_on(0, 60, 64),
            note_on(480, 60, 0),
            end_of_track(),
        ]]);

        assert_eq!(
            encode_smf(&with_real_off).unwrap(),
            encode_smf(&with_zero_velocity).unwrap()
        );
    }

    #[test]
    fn test_long_gap_chains_time_shifts() {
        // 1920 ticks = 2 s = 200 steps = two maximal time-shift tokens
        let smf = smf(vec![vec![
            note_on(0, 60, 64),
            note_off(1920, 60),
            end_of_track(),
        ]]);
        let tokens = encode_smf(&smf).unwrap();

        assert_eq!(
            tokens,
            vec![
                Event::Velocity { bin: 16 }.token(),
                Event::NoteOn { pitch: 60 }.token(),
                Event::TimeShift { steps: 100 }.token(),
                Event::TimeShift { steps: 100 }.token(),
                Event::NoteOff { pitch: 60 }.token(),
            ]
        );
    }

    #[test]
    fn test_tempo_change_stretches_time() {
        // At 60 BPM (1 000 000 µs per beat), 480 ticks = 1 s = 100 steps
        let smf = smf(vec![vec![
            tempo(0, 1_000_000),
            note_on(0, 60, 64),
            note_off(480, 60),
            end_of_track(),
        ]]);
        let tokens = encode_smf(&smf).unwrap();

        assert_eq!(
            tokens,
            vec![
                Event::Velocity { bin: 16 }.token(),
                Event::NoteOn { pitch: 60 }.token(),
                Event::TimeShift { steps: 100 }.token(),
                Event::NoteOff { pitch: 60 }.token(),
            ]
        );
    }

    #[test]
    fn test_tracks_merge_on_absolute_time() {
        // Track 1: note 60 for a full second.
        // Track 2: note 72 starting half way through.
        // Same velocity everywhere, so only one velocity token.
        let smf = smf(vec![
            vec![note_on(0, 60, 64), note_off(960, 60), end_of_track()],
            vec![note_on(480, 72, 64), note_off(480, 72), end_of_track()],
        ]);
        let tokens = encode_smf(&smf).unwrap();

        assert_eq!(
            tokens,
            vec![
                Event::Velocity { bin: 16 }.token(),
                Event::NoteOn { pitch: 60 }.token(),
                Event::TimeShift { steps: 50 }.token(),
                Event::NoteOn { pitch: 72 }.token(),
                Event::TimeShift { steps: 50 }.token(),
                Event::NoteOff { pitch: 60 }.token(),
                Event::NoteOff { pitch: 72 }.token(),
            ]
        );
    }

    #[test]
    fn test_velocity_token_only_on_bin_change() {
        let smf = smf(vec![vec![
            note_on(0, 60, 64),
            note_on(0, 64, 65), // same bin (16), no new velocity token
            note_on(0, 67, 100), // bin 25, new token
            end_of_track(),
        ]]);
        let tokens = encode_smf(&smf).unwrap();

        assert_eq!(
            tokens,
            vec![
                Event::Velocity { bin: 16 }.token(),
                Event::NoteOn { pitch: 60 }.token(),
                Event::NoteOn { pitch: 64 }.token(),
                Event::Velocity { bin: 25 }.token(),
                Event::NoteOn { pitch: 67 }.token(),
            ]
        );
    }

    #[test]
    fn test_smpte_timing_rejected() {
        let smf = Smf {
            header: Header {
                format: Format::SingleTrack,
                timing: Timing::Timecode(midly::Fps::Fps25, 40),
            },
            tracks: vec![vec![end_of_track()]],
        };
        assert!(encode_smf(&smf).is_err());
    }

    #[test]
    fn test_trackless_file_rejected() {
        let smf = Smf {
            header: Header {
                format: Format::SingleTrack,
                timing: Timing::Metrical(TPB.into()),
            },
            tracks: Vec::new(),
        };
        assert!(encode_smf(&smf).is_err());
    }

    #[test]
    fn test_encode_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("piece.mid");

        let smf = smf(vec![vec![
            note_on(0, 60, 64),
            note_off(480, 60),
            end_of_track(),
        ]]);
        let mut bytes = Vec::new();
        smf.write(&mut bytes).unwrap();
        fs::write(&path, &bytes).unwrap();

        let encoder = MidiFileEncoder::new();
        let piece = encoder.encode(&FileEntry::new(&path)).unwrap();

        assert_eq!(piece.source, "piece.mid");
        assert_eq!(piece.event_count(), 4);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.mid");
        fs::write(&path, b"this is not a midi file").unwrap();

        let encoder = MidiFileEncoder::new();
        assert!(encoder.encode(&FileEntry::new(&path)).is_err());
    }
}
