//! Chord engraver — lays out the noteheads, stem and flag of a chord.
//!
//! The single-note layout step builds a [`NoteShape`] for every note; the
//! layout pass registers those shapes in an [`EngraverRegistry`] as the
//! chord's notes come by and finally calls
//! [`EngraverRegistry::create_shapes`] to get the chord's final geometry.

mod chord;
mod constants;
mod meter;
mod noteheads;
mod pitch;
mod registry;
mod shape;
mod stem_direction;
mod stem_flag;

pub use chord::{ChordEngraver, EngravedChord, EngravedNote};
pub use meter::{EngravingOptions, ScoreMeter};
pub use registry::EngraverRegistry;
pub use shape::{FlagGlyph, FlagShape, NoteShape, Notehead, StemShape};
