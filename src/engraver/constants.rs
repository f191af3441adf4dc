//! Default engraving metrics, in tenths of a staff space.

// ── Stem ────────────────────────────────────────────────────────────
pub(super) const STEM_WIDTH: f64 = 1.2;
pub(super) const STEM_LENGTH: f64 = 35.0; // 3.5 spaces
/// Extra stem length for 2, 3, 4 and 5 flags
pub(super) const STEM_FLAG_EXTRA: [f64; 4] = [4.0, 9.0, 13.0, 17.0];

// ── Flag ────────────────────────────────────────────────────────────
pub(super) const FLAG_WIDTH: f64 = 10.5;
pub(super) const FLAG_HEIGHT: f64 = 32.0;
/// Vertical room taken by each flag after the first
pub(super) const FLAG_STACK_STEP: f64 = 7.5;

// ── Staff ───────────────────────────────────────────────────────────
/// Default distance between staff lines, in logical units
pub(super) const DEFAULT_LINE_SPACING: f64 = 180.0;
