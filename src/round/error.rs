use super::*;

/// Protocol violations against a [`Round`].
///
/// These are programmer errors: the offending call is rejected and the
/// round is left untouched. Deadlines and cancellation are never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("{0} is not a participant of this round")]
    UnknownParticipant(Name),
    #[error("{0} has already thrown a gesture")]
    DuplicateGesture(Name),
    #[error("{0} already has an outcome")]
    DuplicateOutcome(Name),
    #[error("outcomes are recorded once the round is finished, not while {0}")]
    NotFinished(Phase),
    #[error("cannot move from {from} back to {to}")]
    IllegalTransition { from: Phase, to: Phase },
    #[error("round already started ({0})")]
    AlreadyStarted(Phase),
}
