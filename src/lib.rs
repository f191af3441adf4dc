//! chordlib — chord layout for engraved music scores.
//!
//! Given the independently laid out notehead shapes of a chord's notes,
//! picks one stem direction for the chord, moves noteheads a second apart
//! to opposite sides of the stem, and attaches the stem and flag.
//!
//! # Example
//! ```
//! use chordlib::*;
//!
//! let mut registry = EngraverRegistry::default();
//! let chord = ChordId(1);
//! let ctx = StaffContext::new(Clef::TREBLE, 0.0);
//!
//! let e4 = Note::new(NoteId(1), Pitch::new(Step::E, 4), NoteType::Eighth);
//! let f4 = Note::new(NoteId(2), Pitch::new(Step::F, 4), NoteType::Eighth);
//! registry.start(chord, e4, NoteShape::new(10.0, 630.0, 232.0, 180.0), ctx).unwrap();
//! registry.end(chord, f4, NoteShape::new(10.0, 540.0, 232.0, 180.0)).unwrap();
//!
//! let engraved = registry.create_shapes(chord).unwrap();
//! assert!(engraved.stem_up);
//! assert_eq!(engraved.reversed(), [false, true]);
//! ```

mod log;

pub mod engraver;
pub mod error;
pub mod model;

pub use engraver::*;
pub use error::EngraveError;
pub use model::*;

/// Convert an engraved chord to a JSON string.
/// Useful for passing shapes across FFI boundaries.
pub fn engraved_chord_to_json(chord: &EngravedChord) -> Result<String, EngraveError> {
    Ok(serde_json::to_string_pretty(chord)?)
}
