use super::*;
use crate::gesture::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;

/// Shared state of a single round.
///
/// The participant list is fixed at construction. Phase, gestures and
/// outcomes live behind one lock, and every mutator validates before it
/// writes, so a rejected call never leaves a partial update behind.
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    players: Vec<Name>,
    seated: HashSet<Name>,
    ledger: Mutex<Ledger>,
}

#[derive(Debug, Default)]
struct Ledger {
    phase: Phase,
    gestures: HashMap<Name, Gesture>,
    outcomes: HashMap<Name, Outcome>,
}

impl Round {
    /// Creates a round that has not started. Duplicate names are dropped,
    /// keeping the first occurrence.
    pub fn new<I>(config: RoundConfig, players: I) -> Self
    where
        I: IntoIterator<Item = Name>,
    {
        let mut seated = HashSet::new();
        let players = players
            .into_iter()
            .filter(|name| seated.insert(name.clone()))
            .collect::<Vec<_>>();
        Self {
            config,
            players,
            seated,
            ledger: Mutex::new(Ledger::default()),
        }
    }
    pub fn config(&self) -> RoundConfig {
        self.config
    }
    pub fn countdown(&self) -> u32 {
        self.config.countdown
    }
    pub fn between(&self) -> Duration {
        self.config.between
    }
    /// Throw time limit, also the fairness window advertised to participants.
    pub fn limit(&self) -> Duration {
        self.config.limit
    }
    /// Participants in seating order.
    pub fn players(&self) -> &[Name] {
        &self.players
    }
    pub fn is_seated(&self, name: &Name) -> bool {
        self.seated.contains(name)
    }
}

impl Round {
    pub fn phase(&self) -> Phase {
        self.ledger().phase
    }
    /// The gesture a participant has thrown, if any.
    pub fn gesture(&self, name: &Name) -> Option<Gesture> {
        self.ledger().gestures.get(name).copied()
    }
    /// A participant's outcome. Absent until the round is finished.
    pub fn outcome(&self, name: &Name) -> Option<Outcome> {
        self.ledger().outcomes.get(name).copied()
    }
    /// True iff every participant has thrown.
    pub fn is_ready(&self) -> bool {
        let ledger = self.ledger();
        self.players
            .iter()
            .all(|name| ledger.gestures.contains_key(name))
    }
    /// Every participant with their gesture, read under a single lock.
    pub fn throws(&self) -> Vec<(Name, Option<Gesture>)> {
        let ledger = self.ledger();
        self.players
            .iter()
            .map(|name| (name.clone(), ledger.gestures.get(name).copied()))
            .collect()
    }
    /// Serializable snapshot of the whole round.
    pub fn summary(&self) -> Summary {
        let ledger = self.ledger();
        Summary {
            phase: ledger.phase,
            players: self
                .players
                .iter()
                .map(|name| Entry {
                    name: name.to_string(),
                    gesture: ledger.gestures.get(name).copied(),
                    outcome: ledger.outcomes.get(name).copied(),
                })
                .collect(),
        }
    }
}

impl Round {
    /// Records a thrown gesture.
    ///
    /// Returns `Ok(false)` without touching the round when it is not in
    /// the throwing phase: early and late arrivals are dropped silently.
    pub fn record_gesture(&self, name: &Name, gesture: Gesture) -> Result<bool, RoundError> {
        self.check(name)?;
        let mut ledger = self.ledger();
        if ledger.phase != Phase::Throwing {
            return Ok(false);
        }
        if ledger.gestures.contains_key(name) {
            return Err(RoundError::DuplicateGesture(name.clone()));
        }
        ledger.gestures.insert(name.clone(), gesture);
        Ok(true)
    }
    /// Records a participant's outcome. Only legal once the round is finished.
    pub fn record_outcome(&self, name: &Name, outcome: Outcome) -> Result<(), RoundError> {
        self.check(name)?;
        let mut ledger = self.ledger();
        if ledger.phase != Phase::Finished {
            return Err(RoundError::NotFinished(ledger.phase));
        }
        if ledger.outcomes.contains_key(name) {
            return Err(RoundError::DuplicateOutcome(name.clone()));
        }
        ledger.outcomes.insert(name.clone(), outcome);
        Ok(())
    }
    /// Moves the round to `next`. Moving backwards fails, except into Stopped.
    pub fn advance(&self, next: Phase) -> Result<(), RoundError> {
        let mut ledger = self.ledger();
        if !ledger.phase.admits(next) {
            return Err(RoundError::IllegalTransition {
                from: ledger.phase,
                to: next,
            });
        }
        ledger.phase = next;
        Ok(())
    }
    /// Atomically moves a fresh round into counting.
    pub fn begin(&self) -> Result<(), RoundError> {
        let mut ledger = self.ledger();
        match ledger.phase {
            Phase::NotStarted => {
                ledger.phase = Phase::Counting;
                Ok(())
            }
            phase => Err(RoundError::AlreadyStarted(phase)),
        }
    }
    /// Forces the round into Stopped, whatever phase it is in.
    /// Returns the phase it was interrupted in.
    pub fn stop(&self) -> Phase {
        std::mem::replace(&mut self.ledger().phase, Phase::Stopped)
    }
}

impl Round {
    fn check(&self, name: &Name) -> Result<(), RoundError> {
        match self.is_seated(name) {
            true => Ok(()),
            false => Err(RoundError::UnknownParticipant(name.clone())),
        }
    }
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ledger = self.ledger();
        write!(f, "round ({})", ledger.phase)?;
        for name in self.players.iter() {
            let gesture = ledger.gestures.get(name).map(Gesture::label).unwrap_or("-");
            match ledger.outcomes.get(name) {
                Some(outcome) => write!(f, " {}:{}={}", name, gesture, outcome)?,
                None => write!(f, " {}:{}", name, gesture)?,
            }
        }
        Ok(())
    }
}
