//! Errors raised when the chord registration protocol is violated.
//!
//! These are caller bugs, not recoverable conditions: the layout pass is
//! expected to abort the chord (or the whole pass) when it receives one.

use thiserror::Error;

use crate::model::ChordId;

#[derive(Debug, Error)]
pub enum EngraveError {
    /// `start` called for a chord that already has an engraver
    #[error("chord {0} already has a first note registered")]
    ChordAlreadyStarted(ChordId),

    /// `middle`/`end`/`create_shapes` for a chord with no engraver
    #[error("chord {0} has no engraver; register its first note before any other")]
    ChordNotStarted(ChordId),

    /// A note arrived after the last note was registered
    #[error("chord {0} is closed: its last note was already registered")]
    RegistrationClosed(ChordId),

    /// `create_shapes` before the last note was registered
    #[error("chord {0} is not ready: last note not registered")]
    NotReady(ChordId),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
