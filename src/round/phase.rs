use serde::Deserialize;
use serde::Serialize;

/// The ordered phases of a round.
///
/// A round only ever moves forward through these, except that
/// [`Phase::Stopped`] can be entered from anywhere.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted = 0isize,
    Counting = 1isize,
    Throwing = 2isize,
    Finished = 3isize,
    Stopped = 4isize,
}

impl Phase {
    /// No transition is defined out of a terminal phase.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Stopped)
    }
    /// Whether a round sitting in this phase may move to `next`.
    pub fn admits(&self, next: Self) -> bool {
        next == Self::Stopped || next >= *self
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Counting => write!(f, "counting"),
            Self::Throwing => write!(f, "throwing"),
            Self::Finished => write!(f, "finished"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}
