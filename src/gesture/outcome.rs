use serde::Deserialize;
use serde::Serialize;

/// Result of a comparison, or a participant's verdict once the round is finished.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Loss,
    Win,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side.
    pub const fn flip(self) -> Self {
        match self {
            Self::Loss => Self::Win,
            Self::Win => Self::Loss,
            Self::Tie => Self::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Loss => write!(f, "loss"),
            Self::Win => write!(f, "win"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
