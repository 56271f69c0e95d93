//! The module contains the errors the engine can return.
//!
//! Only one operation can fail: computing balances for an empty group, where
//! the fair share (`total / participant_count`) is undefined.
//!
//! - [`EmptyParticipantSet`] returned when no participant is given.
//!
//!  [`EmptyParticipantSet`]: EngineError::EmptyParticipantSet
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot split a bill between zero participants")]
    EmptyParticipantSet,
}
