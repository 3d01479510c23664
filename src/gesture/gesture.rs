use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// A hand shape thrown at the end of the countdown.
///
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// The relation is a 3-cycle, so there is no total order over gestures.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// True iff this gesture beats the other one.
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }
    /// The gesture that beats this one.
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            x => Err(format!("invalid gesture {:?}", x)),
        }
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn counter_beats_original() {
        for g in Gesture::all() {
            assert!(g.counter().beats(g));
            assert!(!g.beats(g.counter()));
        }
    }
    #[test]
    fn nothing_beats_itself() {
        assert!(Gesture::all().iter().all(|g| !g.beats(*g)));
    }
    #[test]
    fn cycle_is_not_transitive() {
        assert!(Gesture::Rock.beats(Gesture::Scissors));
        assert!(Gesture::Scissors.beats(Gesture::Paper));
        assert!(!Gesture::Rock.beats(Gesture::Paper));
    }
    #[test]
    fn parse_words_and_letters() {
        assert_eq!(Gesture::try_from("Rock"), Ok(Gesture::Rock));
        assert_eq!(Gesture::try_from("p"), Ok(Gesture::Paper));
        assert_eq!(Gesture::try_from(" SCISSORS "), Ok(Gesture::Scissors));
        assert!(Gesture::try_from("lizard").is_err());
    }
    #[test]
    fn random_is_valid() {
        (0..64)
            .map(|_| Gesture::random())
            .for_each(|g| assert!(Gesture::all().contains(&g)));
    }
}
