//! Notehead placement inside a chord: which noteheads go to the "wrong"
//! side of the stem, and where every notehead ends up horizontally.

use super::chord::ChordNoteData;
use super::pitch::diatonic_distance;

/// The column shared by all non-reversed noteheads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct NoteheadColumn {
    pub left: f64,
    pub width: f64,
}

impl NoteheadColumn {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Marks the noteheads that must be drawn on the other side of the stem.
///
/// Notes are walked from the end where the stem starts: bottom-up for stem
/// up, top-down for stem down. A note a second away from the last notehead
/// left in the default column is reversed.
pub(super) fn flag_reversed_noteheads(
    notes: &mut [ChordNoteData],
    sorted: &[usize],
    stem_up: bool,
) {
    let order: Vec<usize> = if stem_up {
        sorted.to_vec()
    } else {
        sorted.iter().rev().copied().collect()
    };

    let mut last_default: Option<usize> = None;
    for i in order {
        let reversed = last_default.is_some_and(|d| {
            diatonic_distance(&notes[d].note.pitch, &notes[i].note.pitch) == 1
        });
        notes[i].reversed = reversed;
        if !reversed {
            last_default = Some(i);
        }
    }
}

/// Moves every notehead to the common column: the rightmost of the
/// independently computed lefts, as wide as the widest notehead.
///
/// Starts from each note's original left, so running it again changes nothing.
pub(super) fn align_noteheads(notes: &mut [ChordNoteData]) -> NoteheadColumn {
    let left = notes
        .iter()
        .map(|n| n.original_left)
        .fold(f64::NEG_INFINITY, f64::max);
    let width = notes
        .iter()
        .map(|n| n.shape.notehead.width)
        .fold(0.0, f64::max);

    for data in notes.iter_mut() {
        data.shape.notehead.left = left;
    }
    NoteheadColumn { left, width }
}

/// Shifts reversed noteheads across the stem so that they overlap the
/// column only by the stem width.
pub(super) fn arrange_noteheads(
    notes: &mut [ChordNoteData],
    column: NoteheadColumn,
    stem_width: f64,
    stem_up: bool,
) {
    for data in notes.iter_mut() {
        let head = &mut data.shape.notehead;
        head.left = match (data.reversed, stem_up) {
            (false, _) => column.left,
            (true, true) => column.right() - stem_width,
            (true, false) => column.left + stem_width - head.width,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engraver::shape::NoteShape;
    use crate::model::{Note, NoteId, NoteType, Pitch, Step};

    fn data(step: Step, octave: i32, left: f64) -> ChordNoteData {
        let note = Note::new(NoteId(0), Pitch::new(step, octave), NoteType::Quarter);
        ChordNoteData::new(note, NoteShape::new(left, 0.0, 232.0, 180.0))
    }

    fn reversed(notes: &[ChordNoteData]) -> Vec<bool> {
        notes.iter().map(|n| n.reversed).collect()
    }

    #[test]
    fn thirds_are_never_reversed() {
        let mut notes = vec![
            data(Step::C, 4, 10.0),
            data(Step::E, 4, 10.0),
            data(Step::G, 4, 10.0),
        ];
        flag_reversed_noteheads(&mut notes, &[0, 1, 2], true);
        assert_eq!(reversed(&notes), [false, false, false]);
    }

    #[test]
    fn cluster_alternates_from_the_stem_root() {
        let mut notes = vec![
            data(Step::C, 4, 10.0),
            data(Step::D, 4, 10.0),
            data(Step::E, 4, 10.0),
            data(Step::F, 4, 10.0),
        ];
        flag_reversed_noteheads(&mut notes, &[0, 1, 2, 3], true);
        assert_eq!(reversed(&notes), [false, true, false, true]);

        flag_reversed_noteheads(&mut notes, &[0, 1, 2, 3], false);
        assert_eq!(reversed(&notes), [true, false, true, false]);
    }

    #[test]
    fn walks_in_pitch_order_not_storage_order() {
        // stored d5, a4, b4
        let mut notes = vec![
            data(Step::D, 5, 10.0),
            data(Step::A, 4, 10.0),
            data(Step::B, 4, 10.0),
        ];
        flag_reversed_noteheads(&mut notes, &[1, 2, 0], false);
        assert_eq!(reversed(&notes), [false, true, false]);
    }

    #[test]
    fn unison_inside_a_cluster_keeps_seconds_apart() {
        // c4, d4, d#4: both d's are a second from c4
        let mut notes = vec![
            data(Step::C, 4, 10.0),
            data(Step::D, 4, 10.0),
            data(Step::D, 4, 10.0),
        ];
        notes[2].note.pitch = notes[2].note.pitch.with_alter(1.0);
        flag_reversed_noteheads(&mut notes, &[0, 1, 2], true);
        assert_eq!(reversed(&notes), [false, true, true]);

        // stem down: d#4 stays, d4 is a unison of it, c4 goes across
        flag_reversed_noteheads(&mut notes, &[0, 1, 2], false);
        assert_eq!(reversed(&notes), [true, false, false]);
    }

    #[test]
    fn alignment_uses_rightmost_left_and_is_idempotent() {
        let mut notes = vec![data(Step::E, 4, 10.0), data(Step::G, 4, 14.0)];
        let first = align_noteheads(&mut notes);
        let lefts: Vec<f64> = notes.iter().map(|n| n.shape.notehead.left).collect();
        let second = align_noteheads(&mut notes);

        assert_eq!(first, second);
        assert_eq!(first.left, 14.0);
        assert_eq!(first.width, 232.0);
        assert_eq!(lefts, [14.0, 14.0]);
        assert_eq!(notes[0].shape.notehead.left, 14.0);
    }

    #[test]
    fn reversed_heads_cross_the_stem() {
        let mut notes = vec![data(Step::E, 4, 10.0), data(Step::F, 4, 10.0)];
        notes[1].reversed = true;
        let column = align_noteheads(&mut notes);

        arrange_noteheads(&mut notes, column, 21.6, true);
        assert!((notes[0].shape.notehead.left - 10.0).abs() < 1e-9);
        assert!((notes[1].shape.notehead.left - 220.4).abs() < 1e-9);

        arrange_noteheads(&mut notes, column, 21.6, false);
        assert!((notes[0].shape.notehead.left - 10.0).abs() < 1e-9);
        assert!((notes[1].shape.notehead.left - (-200.4)).abs() < 1e-9);
    }
}
