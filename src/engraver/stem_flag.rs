//! Stem and flag geometry for a chord whose noteheads are already placed.

use super::meter::EngravingOptions;
use super::noteheads::NoteheadColumn;
use super::shape::{FlagGlyph, FlagShape, StemShape};

/// Everything the stem builder needs to know about the chord.
#[derive(Debug, Clone, Copy)]
pub(super) struct StemRequest {
    pub column: NoteheadColumn,
    pub stem_up: bool,
    pub stem_width: f64,
    /// Notehead centers of the lowest and highest notes
    pub lowest_y: f64,
    pub highest_y: f64,
    pub middle_line_y: f64,
    pub flags: usize,
    pub beamed: bool,
}

/// Builds the stem, flush with the inner edge of the notehead column, and
/// the flag at its far end. Logical units are `tenths * line_spacing / 10`.
pub(super) fn build_stem_and_flag(
    req: &StemRequest,
    options: &EngravingOptions,
    line_spacing: f64,
) -> (StemShape, Option<FlagShape>) {
    let tenths = |t: f64| t * line_spacing / 10.0;
    let length = tenths(options.stem_length_for(req.flags));

    let stem = if req.stem_up {
        let mut top = req.highest_y - length;
        if options.extend_stem_to_middle_line && top > req.middle_line_y {
            top = req.middle_line_y;
        }
        StemShape {
            left: req.column.right() - req.stem_width,
            width: req.stem_width,
            top,
            bottom: req.lowest_y,
            up: true,
        }
    } else {
        let mut bottom = req.lowest_y + length;
        if options.extend_stem_to_middle_line && bottom < req.middle_line_y {
            bottom = req.middle_line_y;
        }
        StemShape {
            left: req.column.left,
            width: req.stem_width,
            top: req.highest_y,
            bottom,
            up: false,
        }
    };

    let flag = if req.beamed {
        None
    } else {
        FlagGlyph::for_flags(req.flags, req.stem_up).map(|glyph| {
            let (width, height) = options.flag_size;
            let height = tenths(height + (req.flags - 1) as f64 * options.flag_stack_step);
            let top = if req.stem_up { stem.top } else { stem.bottom - height };
            FlagShape {
                glyph,
                left: stem.left,
                top,
                width: tenths(width),
                height,
            }
        })
    };

    (stem, flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    // staff top at 0, spacing 180: middle line at 360
    fn request(stem_up: bool, lowest_y: f64, highest_y: f64, flags: usize) -> StemRequest {
        StemRequest {
            column: NoteheadColumn {
                left: 10.0,
                width: 232.0,
            },
            stem_up,
            stem_width: 21.6,
            lowest_y,
            highest_y,
            middle_line_y: 360.0,
            flags,
            beamed: false,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.1
    }

    #[test]
    fn stem_up_on_the_right_of_the_column() {
        // e4 (y=720) and g4 (y=540)
        let opts = EngravingOptions::default();
        let (stem, flag) = build_stem_and_flag(&request(true, 720.0, 540.0, 0), &opts, 180.0);
        assert!(close(stem.left, 220.4));
        assert!(close(stem.width, 21.6));
        assert!(close(stem.bottom, 720.0));
        assert!(close(stem.top, 540.0 - 630.0));
        assert!(stem.up);
        assert_eq!(flag, None);
    }

    #[test]
    fn stem_down_on_the_left_of_the_column() {
        // c5 (y=270) and e5 (y=90)
        let opts = EngravingOptions::default();
        let (stem, _) = build_stem_and_flag(&request(false, 270.0, 90.0, 0), &opts, 180.0);
        assert!(close(stem.left, 10.0));
        assert!(close(stem.top, 90.0));
        assert!(close(stem.bottom, 270.0 + 630.0));
    }

    #[test]
    fn far_notes_reach_the_middle_line() {
        // c6 and e6 above the staff
        let opts = EngravingOptions::default();
        let (stem, _) = build_stem_and_flag(&request(false, -360.0, -540.0, 0), &opts, 180.0);
        assert!(close(stem.bottom, 360.0));

        let opts = EngravingOptions::default().with_middle_line_extension(false);
        let (stem, _) = build_stem_and_flag(&request(false, -360.0, -540.0, 0), &opts, 180.0);
        assert!(close(stem.bottom, -360.0 + 630.0));
    }

    #[test]
    fn flag_hangs_from_the_stem_end() {
        let opts = EngravingOptions::default();
        let (stem, flag) = build_stem_and_flag(&request(true, 720.0, 540.0, 1), &opts, 180.0);
        let flag = flag.expect("eighth chord has a flag");
        assert_eq!(flag.glyph, FlagGlyph::EighthUp);
        assert!(close(flag.left, stem.left));
        assert!(close(flag.top, stem.top));

        let (stem, flag) = build_stem_and_flag(&request(false, 270.0, 90.0, 2), &opts, 180.0);
        let flag = flag.expect("sixteenth chord has a flag");
        assert_eq!(flag.glyph, FlagGlyph::SixteenthDown);
        assert!(close(flag.top + flag.height, stem.bottom));
        assert!(close(stem.length(), 180.0 + 39.0 * 18.0));
    }

    #[test]
    fn beamed_chords_get_no_flag() {
        let mut req = request(true, 720.0, 540.0, 1);
        req.beamed = true;
        let (_, flag) = build_stem_and_flag(&req, &EngravingOptions::default(), 180.0);
        assert_eq!(flag, None);
    }
}
