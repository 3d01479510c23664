use crate::gesture::*;
use crate::round::*;

/// Computes every participant's outcome from the thrown gestures.
///
/// A participant that loses against at least one opponent loses. Otherwise
/// one that beats at least one opponent wins. Everyone else ties. When that
/// leaves every participant with a loss, the verdict is overridden to a tie
/// for everybody.
pub fn tally(throws: &[(Name, Option<Gesture>)]) -> Vec<(Name, Outcome)> {
    let mut outcomes = throws
        .iter()
        .enumerate()
        .map(|(i, (name, mine))| {
            let (win, loss) = throws
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (_, theirs))| compare(*mine, *theirs))
                .fold((false, false), |(win, loss), outcome| {
                    (win || outcome == Outcome::Win, loss || outcome == Outcome::Loss)
                });
            let outcome = match (win, loss) {
                (_, true) => Outcome::Loss,
                (true, false) => Outcome::Win,
                (false, false) => Outcome::Tie,
            };
            (name.clone(), outcome)
        })
        .collect::<Vec<_>>();
    if !outcomes.is_empty() && outcomes.iter().all(|(_, o)| *o == Outcome::Loss) {
        outcomes.iter_mut().for_each(|(_, o)| *o = Outcome::Tie);
    }
    outcomes
}
