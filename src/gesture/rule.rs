use super::*;

/// Compares two possibly absent gestures, from the point of view of `a`.
///
/// In priority order: equal values (absent/absent included) tie, an absent
/// gesture loses to a present one, otherwise the rock/paper/scissors cycle
/// decides. Only ever use this pairwise; it is not a total order.
pub fn compare(a: Option<Gesture>, b: Option<Gesture>) -> Outcome {
    match (a, b) {
        _ if a == b => Outcome::Tie,
        (None, Some(_)) => Outcome::Loss,
        (Some(_), None) => Outcome::Win,
        (Some(a), Some(b)) if a.beats(b) => Outcome::Win,
        _ => Outcome::Loss,
    }
}
