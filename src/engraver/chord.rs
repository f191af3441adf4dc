//! Chord engraver: collects the notes of one chord and lays them out
//! together.
//!
//! Notes arrive one at a time as their single-note shapes are built: a
//! first note, any number of middle notes and a last note. `create_shapes`
//! then sorts the notes by pitch, decides the stem direction, places the
//! noteheads, builds stem and flag and records each notehead's shift.

use serde::Serialize;

use crate::error::EngraveError;
use crate::log::{debug, warn};
use crate::model::{ChordId, Note, NoteId, StaffContext};

use super::meter::{EngravingOptions, ScoreMeter};
use super::noteheads::{align_noteheads, arrange_noteheads, flag_reversed_noteheads, NoteheadColumn};
use super::pitch::{compare_pitch, steps_from_middle_line};
use super::shape::{FlagShape, NoteShape, StemShape};
use super::stem_direction::decide_stem_up;
use super::stem_flag::{build_stem_and_flag, StemRequest};

/// Index of the base note: the first note registered.
const BASE_NOTE: usize = 0;

/// Layout record of one chord note.
#[derive(Debug, Clone)]
pub(super) struct ChordNoteData {
    pub note: Note,
    pub shape: NoteShape,
    /// Notehead drawn on the other side of the stem
    pub reversed: bool,
    /// Notehead left as computed by single-note layout
    pub original_left: f64,
}

impl ChordNoteData {
    pub fn new(note: Note, shape: NoteShape) -> Self {
        let original_left = shape.notehead.left;
        Self {
            note,
            shape,
            reversed: false,
            original_left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Collecting,
    Ready,
}

/// Layout state of a single chord for one engraving pass.
#[derive(Debug, Clone)]
pub struct ChordEngraver {
    chord: ChordId,
    context: StaffContext,
    options: EngravingOptions,
    line_spacing: f64,
    phase: Phase,
    /// In registration order
    notes: Vec<ChordNoteData>,
    /// Indices into `notes`, lowest pitch first
    sorted: Vec<usize>,
    stem_up: bool,
    stem_width: f64,
    column: NoteheadColumn,
    stem: Option<StemShape>,
    flag: Option<FlagShape>,
}

impl ChordEngraver {
    /// Starts a chord with its first note, which becomes the base note.
    pub fn start(
        chord: ChordId,
        note: Note,
        shape: NoteShape,
        context: StaffContext,
        meter: &ScoreMeter,
        options: &EngravingOptions,
    ) -> Self {
        let line_spacing = meter.line_spacing(context.instrument, context.staff);
        let stem_width = if note.note_type.has_stem() {
            options.stem_width * line_spacing / 10.0
        } else {
            0.0
        };
        let column = NoteheadColumn {
            left: shape.notehead.left,
            width: shape.notehead.width,
        };
        Self {
            chord,
            context,
            options: options.clone(),
            line_spacing,
            phase: Phase::Collecting,
            notes: vec![ChordNoteData::new(note, shape)],
            sorted: Vec::new(),
            stem_up: false,
            stem_width,
            column,
            stem: None,
            flag: None,
        }
    }

    /// Adds a note that is neither the first nor the last.
    pub fn add_middle(&mut self, note: Note, shape: NoteShape) -> Result<(), EngraveError> {
        self.ensure_collecting()?;
        self.notes.push(ChordNoteData::new(note, shape));
        Ok(())
    }

    /// Adds the last note and closes registration.
    pub fn add_last(&mut self, note: Note, shape: NoteShape) -> Result<(), EngraveError> {
        self.ensure_collecting()?;
        self.notes.push(ChordNoteData::new(note, shape));
        self.phase = Phase::Ready;
        self.sort_notes();
        Ok(())
    }

    fn ensure_collecting(&self) -> Result<(), EngraveError> {
        match self.phase {
            Phase::Collecting => Ok(()),
            Phase::Ready => Err(EngraveError::RegistrationClosed(self.chord)),
        }
    }

    pub fn chord(&self) -> ChordId {
        self.chord
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn base_note(&self) -> NoteId {
        self.notes[BASE_NOTE].note.id
    }

    /// Lays out the chord and hands the shapes back.
    pub fn create_shapes(mut self) -> Result<EngravedChord, EngraveError> {
        // Ready implies a first and a last note, so at least two
        if self.phase != Phase::Ready {
            return Err(EngraveError::NotReady(self.chord));
        }

        self.decide_on_stem_direction();
        self.align_noteheads();
        self.arrange_noteheads_to_avoid_collisions();
        self.add_stem_and_flag();
        self.set_anchor_offset();

        Ok(self.into_engraved())
    }

    fn sort_notes(&mut self) {
        let notes = &self.notes;
        let mut sorted: Vec<usize> = (0..notes.len()).collect();
        // stable: unisons keep registration order
        sorted.sort_by(|&a, &b| compare_pitch(&notes[a].note.pitch, &notes[b].note.pitch));
        self.sorted = sorted;
    }

    fn decide_on_stem_direction(&mut self) {
        let clef = self.context.clef;
        let steps: Vec<i32> = self
            .sorted
            .iter()
            .map(|&i| steps_from_middle_line(&self.notes[i].note.pitch, &clef))
            .collect();
        let requested = self.notes.iter().find_map(|n| n.note.stem);
        self.stem_up = decide_stem_up(&steps, requested);
        debug!(chord = %self.chord, stem_up = self.stem_up, "stem direction decided");
    }

    fn align_noteheads(&mut self) {
        if self.notes.iter().any(|n| n.shape.notehead.width <= 0.0) {
            warn!(chord = %self.chord, "chord has a zero-width notehead");
        }
        self.column = align_noteheads(&mut self.notes);
    }

    fn arrange_noteheads_to_avoid_collisions(&mut self) {
        flag_reversed_noteheads(&mut self.notes, &self.sorted, self.stem_up);
        arrange_noteheads(&mut self.notes, self.column, self.stem_width, self.stem_up);
        debug!(
            chord = %self.chord,
            reversed = self.notes.iter().filter(|n| n.reversed).count(),
            "noteheads arranged"
        );
    }

    fn add_stem_and_flag(&mut self) {
        let base = &self.notes[BASE_NOTE].note;
        if !base.note_type.has_stem() {
            self.stem = None;
            self.flag = None;
            return;
        }

        let (Some(&lowest), Some(&highest)) = (self.sorted.first(), self.sorted.last()) else {
            return;
        };
        let req = StemRequest {
            column: self.column,
            stem_up: self.stem_up,
            stem_width: self.stem_width,
            lowest_y: self.notes[lowest].shape.notehead.center_y(),
            highest_y: self.notes[highest].shape.notehead.center_y(),
            middle_line_y: self.context.staff_top + 2.0 * self.line_spacing,
            flags: base.note_type.flag_count(),
            beamed: self.notes.iter().any(|n| n.note.beamed),
        };
        let (stem, flag) = build_stem_and_flag(&req, &self.options, self.line_spacing);
        debug!(
            chord = %self.chord,
            left = stem.left,
            top = stem.top,
            bottom = stem.bottom,
            flag = flag.is_some(),
            "stem built"
        );
        self.stem = Some(stem);
        self.flag = flag;
    }

    fn set_anchor_offset(&mut self) {
        for data in &mut self.notes {
            let left = data.shape.notehead.left;
            data.shape.anchor_offset = left - data.original_left;
            data.shape.left = left;
        }
        let base = &mut self.notes[BASE_NOTE].shape;
        base.stem = self.stem;
        base.flag = self.flag;
    }

    fn into_engraved(self) -> EngravedChord {
        let pitch_order = self.sorted;
        let notes = self
            .notes
            .into_iter()
            .map(|data| EngravedNote {
                note: data.note.id,
                reversed: data.reversed,
                shape: data.shape,
            })
            .collect();
        EngravedChord {
            chord: self.chord,
            stem_up: self.stem_up,
            stem_width: self.stem_width,
            notes,
            pitch_order,
        }
    }
}

/// One note's final layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngravedNote {
    pub note: NoteId,
    pub reversed: bool,
    pub shape: NoteShape,
}

/// Result of engraving a chord. The stem and flag live on the base note's shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngravedChord {
    pub chord: ChordId,
    pub stem_up: bool,
    /// 0.0 for chords drawn without a stem
    pub stem_width: f64,
    /// In registration order; the first is the base note
    pub notes: Vec<EngravedNote>,
    /// Indices into `notes`, lowest pitch first
    pub pitch_order: Vec<usize>,
}

impl EngravedChord {
    pub fn base_note(&self) -> &EngravedNote {
        &self.notes[BASE_NOTE]
    }

    pub fn stem(&self) -> Option<&StemShape> {
        self.base_note().shape.stem.as_ref()
    }

    pub fn flag(&self) -> Option<&FlagShape> {
        self.base_note().shape.flag.as_ref()
    }

    pub fn shape(&self, note: NoteId) -> Option<&NoteShape> {
        self.notes.iter().find(|n| n.note == note).map(|n| &n.shape)
    }

    /// Notes from the lowest pitch to the highest.
    pub fn notes_by_pitch(&self) -> impl Iterator<Item = &EngravedNote> + '_ {
        self.pitch_order.iter().map(|&i| &self.notes[i])
    }

    /// Reversed flags, lowest pitch first.
    pub fn reversed(&self) -> Vec<bool> {
        self.notes_by_pitch().map(|n| n.reversed).collect()
    }
}
