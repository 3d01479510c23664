use super::*;
use crate::gesture::*;
use serde::Deserialize;
use serde::Serialize;

/// Point-in-time view of a round, suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub phase: Phase,
    pub players: Vec<Entry>,
}

/// One participant's line in a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub gesture: Option<Gesture>,
    pub outcome: Option<Outcome>,
}

impl Summary {
    /// A stopped round never computed its outcomes.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Finished && self.players.iter().all(|e| e.outcome.is_some())
    }
    pub fn winners(&self) -> impl Iterator<Item = &Entry> {
        self.players
            .iter()
            .filter(|e| e.outcome == Some(Outcome::Win))
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "round {}", self.phase)?;
        for entry in self.players.iter() {
            let gesture = entry.gesture.map(|g| g.label()).unwrap_or("nothing");
            match entry.outcome {
                Some(outcome) => writeln!(f, "  {:<16} {:<10} {}", entry.name, gesture, outcome)?,
                None => writeln!(f, "  {:<16} {:<10}", entry.name, gesture)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn summary_json_shape() {
        let round = Round::new(RoundConfig::default(), [Name::from("alice")]);
        round.advance(Phase::Throwing).unwrap();
        round.record_gesture(&Name::from("alice"), Gesture::Rock).unwrap();
        let json = serde_json::to_value(round.summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phase": "throwing",
                "players": [{ "name": "alice", "gesture": "rock", "outcome": null }]
            })
        );
    }
    #[test]
    fn incomplete_until_finished() {
        let round = Round::new(RoundConfig::default(), [Name::from("alice")]);
        assert!(!round.summary().is_complete());
        round.advance(Phase::Finished).unwrap();
        round.record_outcome(&Name::from("alice"), Outcome::Tie).unwrap();
        assert!(round.summary().is_complete());
        assert_eq!(round.summary().winners().count(), 0);
    }
}
