//! Pitch ordering and diatonic distances between chord notes.

use std::cmp::Ordering;

use crate::model::{Clef, Pitch};

/// Orders two pitches by staff position, breaking ties on alteration
/// (so C4 sorts before C4 quarter-sharp before C#4).
pub(super) fn compare_pitch(a: &Pitch, b: &Pitch) -> Ordering {
    a.diatonic().cmp(&b.diatonic()).then_with(|| {
        let alter = |p: &Pitch| p.alter.unwrap_or(0.0);
        alter(a).total_cmp(&alter(b))
    })
}

/// Number of diatonic steps between two pitches: 0 = unison, 1 = second.
pub(super) fn diatonic_distance(a: &Pitch, b: &Pitch) -> i32 {
    (a.diatonic() - b.diatonic()).abs()
}

/// Steps from the staff middle line: positive above, negative below.
pub(super) fn steps_from_middle_line(pitch: &Pitch, clef: &Clef) -> i32 {
    pitch.diatonic() - clef.middle_line()
}
