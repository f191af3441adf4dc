//! Engraving scale and tunable metrics.

use std::collections::HashMap;

use super::constants::*;

/// Scale of the staves being engraved: how many logical units one staff
/// space measures. Every metric in tenths is converted through it.
///
/// Staves default to one spacing; individual staves (cue staves, small
/// instruments) can be given their own.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMeter {
    line_spacing: f64,
    staff_spacing: HashMap<(usize, usize), f64>,
}

impl ScoreMeter {
    pub fn new(line_spacing: f64) -> Self {
        Self {
            line_spacing,
            staff_spacing: HashMap::new(),
        }
    }

    /// Use `line_spacing` for staff `staff` of instrument `instrument`.
    pub fn with_staff_spacing(
        mut self,
        instrument: usize,
        staff: usize,
        line_spacing: f64,
    ) -> Self {
        self.staff_spacing.insert((instrument, staff), line_spacing);
        self
    }

    pub fn line_spacing(&self, instrument: usize, staff: usize) -> f64 {
        self.staff_spacing
            .get(&(instrument, staff))
            .copied()
            .unwrap_or(self.line_spacing)
    }

    pub fn tenths_to_logical(&self, tenths: f64, instrument: usize, staff: usize) -> f64 {
        tenths * self.line_spacing(instrument, staff) / 10.0
    }
}

impl Default for ScoreMeter {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_SPACING)
    }
}

/// Metrics used when building stems and flags, in tenths.
#[derive(Debug, Clone, PartialEq)]
pub struct EngravingOptions {
    /// Stem line thickness
    pub stem_width: f64,

    /// Stem length measured from the farthest notehead
    pub stem_length: f64,

    /// Extra stem length for 2, 3, 4 and 5 flags
    pub stem_flag_extra: [f64; 4],

    /// Flag glyph size (width, height)
    pub flag_size: (f64, f64),

    /// Additional height of each flag beyond the first
    pub flag_stack_step: f64,

    /// Lengthen stems of notes far outside the staff so they reach the middle line
    pub extend_stem_to_middle_line: bool,
}

impl Default for EngravingOptions {
    fn default() -> Self {
        Self {
            stem_width: STEM_WIDTH,
            stem_length: STEM_LENGTH,
            stem_flag_extra: STEM_FLAG_EXTRA,
            flag_size: (FLAG_WIDTH, FLAG_HEIGHT),
            flag_stack_step: FLAG_STACK_STEP,
            extend_stem_to_middle_line: true,
        }
    }
}

impl EngravingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stem_width(mut self, tenths: f64) -> Self {
        self.stem_width = tenths;
        self
    }

    pub fn with_stem_length(mut self, tenths: f64) -> Self {
        self.stem_length = tenths;
        self
    }

    pub fn with_flag_size(mut self, width: f64, height: f64) -> Self {
        self.flag_size = (width, height);
        self
    }

    pub fn with_middle_line_extension(mut self, enabled: bool) -> Self {
        self.extend_stem_to_middle_line = enabled;
        self
    }

    /// Stem length for a stem carrying `flags` flags, in tenths.
    pub fn stem_length_for(&self, flags: usize) -> f64 {
        let extra = match flags {
            0 | 1 => 0.0,
            n => self.stem_flag_extra[(n - 2).min(self.stem_flag_extra.len() - 1)],
        };
        self.stem_length + extra
    }
}
