//! Stem direction for a whole chord.
//!
//! Rules (conventional engraving practice):
//!
//! * Two notes: the note farther from the middle line decides. Farther
//!   above gives a stem down, farther below gives a stem up, equal distance
//!   gives a stem down.
//! * Three or more notes: the same rule on the outermost notes. When both
//!   are equally distant the remaining notes vote: more notes below the
//!   middle line give a stem up, otherwise the stem goes down.

use crate::model::StemDirection;

/// Decides the stem direction from the notes' positions relative to the
/// middle line (positive above), sorted from lowest to highest.
///
/// A stem direction written in the score wins over the heuristic.
pub(super) fn decide_stem_up(steps: &[i32], requested: Option<StemDirection>) -> bool {
    if let Some(dir) = requested {
        return dir == StemDirection::Up;
    }

    let (Some(&lowest), Some(&highest)) = (steps.first(), steps.last()) else {
        return false;
    };

    let below = -lowest;
    let above = highest;
    if below != above {
        return below > above;
    }

    let inner: &[i32] = if steps.len() > 2 {
        &steps[1..steps.len() - 1]
    } else {
        &[]
    };
    let n_below = inner.iter().filter(|&&s| s < 0).count();
    let n_above = inner.iter().filter(|&&s| s > 0).count();
    n_below > n_above
}

#[cfg(test)]
mod tests {
    use super::*;

    // steps above B4 in treble clef: e4=-4 g4=-2 a4=-1 c5=1 d5=2 f5=4

    #[test]
    fn two_notes_farther_note_decides() {
        assert!(!decide_stem_up(&[-1, 2], None)); // a4 d5
        assert!(decide_stem_up(&[-4, 1], None)); // e4 c5
    }

    #[test]
    fn two_notes_equidistant_stem_down() {
        assert!(!decide_stem_up(&[-2, 2], None)); // g4 d5
    }

    #[test]
    fn equidistant_extremes_inner_notes_vote() {
        assert!(decide_stem_up(&[-4, -2, 4], None)); // e4 g4 f5
        assert!(!decide_stem_up(&[-4, 2, 4], None)); // e4 d5 f5
        assert!(!decide_stem_up(&[-4, 0, 4], None));
        assert!(!decide_stem_up(&[-4, -2, 2, 4], None));
    }

    #[test]
    fn whole_chord_one_side_of_staff() {
        assert!(decide_stem_up(&[-6, -4, -2], None));
        assert!(!decide_stem_up(&[1, 3, 5], None));
    }

    #[test]
    fn written_direction_overrides_rules() {
        assert!(decide_stem_up(&[1, 3, 5], Some(StemDirection::Up)));
        assert!(!decide_stem_up(&[-6, -4], Some(StemDirection::Down)));
    }
}
