//! Chord → engraver map owned by the layout pass.
//!
//! Each note of a chord is laid out on its own; the registry lets them
//! find the engraver their chord is being collected in.

use std::collections::HashMap;

use crate::error::EngraveError;
use crate::model::{ChordId, Note, StaffContext};

use super::chord::{ChordEngraver, EngravedChord};
use super::meter::{EngravingOptions, ScoreMeter};
use super::shape::NoteShape;

#[derive(Debug, Clone, Default)]
pub struct EngraverRegistry {
    meter: ScoreMeter,
    options: EngravingOptions,
    engravers: HashMap<ChordId, ChordEngraver>,
}

impl EngraverRegistry {
    pub fn new(meter: ScoreMeter, options: EngravingOptions) -> Self {
        Self {
            meter,
            options,
            engravers: HashMap::new(),
        }
    }

    /// Registers the first note of `chord`.
    pub fn start(
        &mut self,
        chord: ChordId,
        note: Note,
        shape: NoteShape,
        context: StaffContext,
    ) -> Result<(), EngraveError> {
        if self.engravers.contains_key(&chord) {
            return Err(EngraveError::ChordAlreadyStarted(chord));
        }
        let engraver =
            ChordEngraver::start(chord, note, shape, context, &self.meter, &self.options);
        self.engravers.insert(chord, engraver);
        Ok(())
    }

    pub fn middle(
        &mut self,
        chord: ChordId,
        note: Note,
        shape: NoteShape,
    ) -> Result<(), EngraveError> {
        self.engraver_mut(chord)?.add_middle(note, shape)
    }

    /// Registers the last note of `chord`.
    pub fn end(
        &mut self,
        chord: ChordId,
        note: Note,
        shape: NoteShape,
    ) -> Result<(), EngraveError> {
        self.engraver_mut(chord)?.add_last(note, shape)
    }

    pub fn get(&self, chord: ChordId) -> Option<&ChordEngraver> {
        self.engravers.get(&chord)
    }

    /// Engraves `chord` and drops its engraver.
    ///
    /// The engraver is dropped even when engraving fails: a failed chord
    /// is abandoned, not retried.
    pub fn create_shapes(&mut self, chord: ChordId) -> Result<EngravedChord, EngraveError> {
        let engraver = self
            .engravers
            .remove(&chord)
            .ok_or(EngraveError::ChordNotStarted(chord))?;
        engraver.create_shapes()
    }

    /// Chords with notes registered but not yet engraved.
    pub fn len(&self) -> usize {
        self.engravers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engravers.is_empty()
    }

    fn engraver_mut(&mut self, chord: ChordId) -> Result<&mut ChordEngraver, EngraveError> {
        self.engravers
            .get_mut(&chord)
            .ok_or(EngraveError::ChordNotStarted(chord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Clef, NoteId, NoteType, Pitch, Step};

    fn note(id: u32, step: Step) -> (Note, NoteShape) {
        let note = Note::new(NoteId(id), Pitch::new(step, 4), NoteType::Quarter);
        (note, NoteShape::new(10.0, 0.0, 232.0, 180.0))
    }

    fn ctx() -> StaffContext {
        StaffContext::new(Clef::TREBLE, 0.0)
    }

    #[test]
    fn notes_of_one_chord_converge() {
        let mut registry = EngraverRegistry::default();
        let chord = ChordId(7);
        let (n1, s1) = note(1, Step::C);
        let (n2, s2) = note(2, Step::E);
        let (n3, s3) = note(3, Step::G);

        registry.start(chord, n1, s1, ctx()).unwrap();
        registry.middle(chord, n2, s2).unwrap();
        registry.end(chord, n3, s3).unwrap();

        let engraver = registry.get(chord).unwrap();
        assert!(engraver.is_ready());
        assert_eq!(engraver.note_count(), 3);
        assert_eq!(engraver.base_note(), NoteId(1));

        let engraved = registry.create_shapes(chord).unwrap();
        assert_eq!(engraved.notes.len(), 3);
        assert!(registry.is_empty());
    }

    #[test]
    fn chords_are_kept_apart() {
        let mut registry = EngraverRegistry::default();
        let (n1, s1) = note(1, Step::C);
        let (n2, s2) = note(2, Step::E);
        registry.start(ChordId(1), n1, s1, ctx()).unwrap();
        registry.start(ChordId(2), n2, s2, ctx()).unwrap();
        assert_eq!(registry.len(), 2);

        let (n3, s3) = note(3, Step::G);
        registry.end(ChordId(1), n3, s3).unwrap();
        assert!(registry.get(ChordId(1)).unwrap().is_ready());
        assert!(!registry.get(ChordId(2)).unwrap().is_ready());
    }

    #[test]
    fn out_of_order_calls_are_errors() {
        let mut registry = EngraverRegistry::default();
        let chord = ChordId(1);
        let (n1, s1) = note(1, Step::C);
        let (n2, s2) = note(2, Step::E);

        let err = registry.middle(chord, n1.clone(), s1.clone()).unwrap_err();
        assert!(matches!(err, EngraveError::ChordNotStarted(_)));
        let err = registry.create_shapes(chord).unwrap_err();
        assert!(matches!(err, EngraveError::ChordNotStarted(_)));

        registry.start(chord, n1.clone(), s1.clone(), ctx()).unwrap();
        let err = registry.start(chord, n1, s1, ctx()).unwrap_err();
        assert!(matches!(err, EngraveError::ChordAlreadyStarted(_)));

        let err = registry.create_shapes(chord).unwrap_err();
        assert!(matches!(err, EngraveError::NotReady(_)));
        // abandoned after the failed attempt
        assert!(registry.get(chord).is_none());
        let err = registry.end(chord, n2, s2).unwrap_err();
        assert!(matches!(err, EngraveError::ChordNotStarted(_)));
    }
}
