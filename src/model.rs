//! Input model: the note entities and staff context a chord is engraved from.
//!
//! These structures are produced by the surrounding score model; the chord
//! engraver only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a chord within the score being engraved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChordId(pub u32);

impl fmt::Display for ChordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a note within the score being engraved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u32);

/// A note that is a member of a chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub pitch: Pitch,
    /// Duration class
    pub note_type: NoteType,
    /// Stem direction written in the score; `None` lets the engraver decide.
    /// In a chord, the first registered note that has one sets it.
    pub stem: Option<StemDirection>,
    /// Whether the note belongs to a beam group (beamed notes get no flag)
    pub beamed: bool,
}

impl Note {
    /// A note with engraver-chosen stem direction and no beam.
    pub fn new(id: NoteId, pitch: Pitch, note_type: NoteType) -> Self {
        Self {
            id,
            pitch,
            note_type,
            stem: None,
            beamed: false,
        }
    }

    pub fn with_stem(mut self, stem: StemDirection) -> Self {
        self.stem = Some(stem);
        self
    }

    pub fn beamed(mut self) -> Self {
        self.beamed = true;
        self
    }
}

/// Diatonic step name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Index within the octave, C = 0 .. B = 6.
    pub fn index(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }

    fn semitone(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }
}

/// Pitch of a note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub step: Step,
    /// Octave number (middle C = C4)
    pub octave: i32,
    /// Chromatic alteration: -1.0 = flat, 1.0 = sharp, 0.0 = natural
    pub alter: Option<f64>,
}

impl Pitch {
    pub fn new(step: Step, octave: i32) -> Self {
        Self {
            step,
            octave,
            alter: None,
        }
    }

    pub fn with_alter(mut self, alter: f64) -> Self {
        self.alter = Some(alter);
        self
    }

    /// Diatonic position: seven steps per octave, C0 = 0.
    pub fn diatonic(&self) -> i32 {
        self.octave * 7 + self.step.index()
    }

    /// Convert pitch to MIDI note number.
    /// Middle C (C4) = 60.
    pub fn to_midi(&self) -> i32 {
        let alter = self.alter.unwrap_or(0.0) as i32;
        (self.octave + 1) * 12 + self.step.semitone() + alter
    }
}

/// Duration class of a note, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteType {
    Breve,
    Whole,
    Half,
    Quarter,
    Eighth,
    #[serde(rename = "16th")]
    Sixteenth,
    #[serde(rename = "32nd")]
    ThirtySecond,
    #[serde(rename = "64th")]
    SixtyFourth,
    #[serde(rename = "128th")]
    OneHundredTwentyEighth,
}

impl NoteType {
    /// Whole notes and longer are drawn without a stem.
    pub fn has_stem(self) -> bool {
        !matches!(self, NoteType::Breve | NoteType::Whole)
    }

    /// Number of flags an unbeamed stem of this duration carries.
    pub fn flag_count(self) -> usize {
        match self {
            NoteType::Eighth => 1,
            NoteType::Sixteenth => 2,
            NoteType::ThirtySecond => 3,
            NoteType::SixtyFourth => 4,
            NoteType::OneHundredTwentyEighth => 5,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClefSign {
    G,
    F,
    C,
}

/// Clef definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clef {
    pub sign: ClefSign,
    /// Staff line the clef sits on (1 = bottom line)
    pub line: i32,
    /// Octave transposition (e.g., -1 for guitar's octave-lower treble clef)
    pub octave_change: Option<i32>,
}

impl Clef {
    pub const TREBLE: Clef = Clef {
        sign: ClefSign::G,
        line: 2,
        octave_change: None,
    };
    pub const BASS: Clef = Clef {
        sign: ClefSign::F,
        line: 4,
        octave_change: None,
    };
    pub const ALTO: Clef = Clef {
        sign: ClefSign::C,
        line: 3,
        octave_change: None,
    };

    /// Diatonic position of the pitch sitting on the staff middle line.
    pub fn middle_line(&self) -> i32 {
        let reference = match self.sign {
            ClefSign::G => 4 * 7 + 4, // G4
            ClefSign::F => 3 * 7 + 3, // F3
            ClefSign::C => 4 * 7,     // C4
        };
        // each staff line is two diatonic steps; line 3 is the middle one
        let offset = (3 - self.line) * 2;
        reference + offset + self.octave_change.unwrap_or(0) * 7
    }
}

impl Default for Clef {
    fn default() -> Self {
        Clef::TREBLE
    }
}

/// Where the chord's notes are being laid out. Passed with every registered note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffContext {
    pub instrument: usize,
    pub staff: usize,
    pub system: usize,
    pub column: usize,
    pub clef: Clef,
    /// y of the top staff line, in logical units
    pub staff_top: f64,
}

impl StaffContext {
    pub fn new(clef: Clef, staff_top: f64) -> Self {
        Self {
            instrument: 0,
            staff: 0,
            system: 0,
            column: 0,
            clef,
            staff_top,
        }
    }
}
