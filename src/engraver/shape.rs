//! Shapes produced for each chord note: notehead box, stem and flag.
//!
//! All coordinates are logical units, y growing downwards.

use serde::Serialize;

/// Bounding box of a notehead glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Notehead {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Notehead {
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StemShape {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub bottom: f64,
    pub up: bool,
}

impl StemShape {
    pub fn length(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlagGlyph {
    EighthUp,
    EighthDown,
    SixteenthUp,
    SixteenthDown,
    ThirtySecondUp,
    ThirtySecondDown,
    SixtyFourthUp,
    SixtyFourthDown,
    OneHundredTwentyEighthUp,
    OneHundredTwentyEighthDown,
}

impl FlagGlyph {
    pub fn for_flags(count: usize, stem_up: bool) -> Option<Self> {
        let glyph = match (count, stem_up) {
            (1, true) => FlagGlyph::EighthUp,
            (1, false) => FlagGlyph::EighthDown,
            (2, true) => FlagGlyph::SixteenthUp,
            (2, false) => FlagGlyph::SixteenthDown,
            (3, true) => FlagGlyph::ThirtySecondUp,
            (3, false) => FlagGlyph::ThirtySecondDown,
            (4, true) => FlagGlyph::SixtyFourthUp,
            (4, false) => FlagGlyph::SixtyFourthDown,
            (5, true) => FlagGlyph::OneHundredTwentyEighthUp,
            (5, false) => FlagGlyph::OneHundredTwentyEighthDown,
            _ => return None,
        };
        Some(glyph)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlagShape {
    pub glyph: FlagGlyph,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Shape of one note of a chord.
///
/// Built by the single-note layout step and handed to the chord engraver,
/// which moves the notehead, records the applied shift in `anchor_offset`
/// and, on the base note, attaches the stem and flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteShape {
    /// Left edge of the shape as seen by the outer layout
    pub left: f64,
    pub notehead: Notehead,
    /// Horizontal shift applied by chord layout, relative to the
    /// independently computed position
    pub anchor_offset: f64,
    pub stem: Option<StemShape>,
    pub flag: Option<FlagShape>,
}

impl NoteShape {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            notehead: Notehead {
                left,
                top,
                width,
                height,
            },
            anchor_offset: 0.0,
            stem: None,
            flag: None,
        }
    }

    pub fn notehead_left(&self) -> f64 {
        self.notehead.left
    }

    pub fn notehead_width(&self) -> f64 {
        self.notehead.width
    }

    pub fn anchor_offset(&self) -> f64 {
        self.anchor_offset
    }

    /// Left of the stem, or 0.0 when this shape has no stem.
    pub fn stem_left(&self) -> f64 {
        self.stem.map_or(0.0, |s| s.left)
    }

    /// Width of the stem, or 0.0 when this shape has no stem.
    pub fn stem_width(&self) -> f64 {
        self.stem.map_or(0.0, |s| s.width)
    }
}
