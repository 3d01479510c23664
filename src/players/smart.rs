use crate::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;
use tokio::time::Instant;

/// Opponent-aware player that tries to peek before it throws.
///
/// While the throw window is open it polls the round for any opponent's
/// recorded gesture and answers with the gesture that beats it. If nothing
/// shows up before the window is nearly over, it falls back to a random throw.
#[derive(Debug)]
pub struct SmartPlayer {
    name: Name,
    sight: Mutex<Option<Sight>>,
}

#[derive(Debug, Clone)]
struct Sight {
    round: Arc<Round>,
    opponents: Vec<Name>,
}

impl SmartPlayer {
    pub fn new<N: Into<Name>>(name: N) -> Self {
        Self {
            name: name.into(),
            sight: Mutex::new(None),
        }
    }
    fn sight(&self) -> Option<Sight> {
        self.sight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    fn peek(sight: &Sight) -> Option<Gesture> {
        sight
            .opponents
            .iter()
            .find_map(|opponent| sight.round.gesture(opponent))
    }
    async fn outwait(&self, sight: Sight) -> Gesture {
        let start = Instant::now();
        let safe = sight
            .round
            .limit()
            .saturating_sub(Duration::from_millis(SAFE_LIMIT_DELTA));
        loop {
            if let Some(gesture) = Self::peek(&sight) {
                log::debug!("[{}] spotted {}", self.name, gesture);
                return gesture.counter();
            }
            if start.elapsed() > safe {
                log::debug!("[{}] nothing spotted in time", self.name);
                return Gesture::random();
            }
            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL)).await;
        }
    }
}

impl Aware for SmartPlayer {
    fn observe(&self, round: Arc<Round>, opponents: Vec<Name>) {
        *self.sight.lock().unwrap_or_else(PoisonError::into_inner) = Some(Sight { round, opponents });
    }
}

#[async_trait::async_trait]
impl Listener for SmartPlayer {
    async fn countdown(&self, count: u32) {
        log::debug!("[{}] countdown {}", self.name, count);
    }
    async fn finished(&self, round: &Round) {
        match round.outcome(&self.name) {
            Some(outcome) => log::info!("[{}] result: {}", self.name, outcome),
            None => log::warn!("[{}] round finished without a result", self.name),
        }
    }
}

#[async_trait::async_trait]
impl Player for SmartPlayer {
    fn name(&self) -> Name {
        self.name.clone()
    }
    async fn throw(&self) -> Option<Gesture> {
        let gesture = match self.sight() {
            Some(sight) if !sight.opponents.is_empty() => self.outwait(sight).await,
            Some(_) => Gesture::random(),
            None => {
                log::warn!("[{}] asked to throw without observing the round", self.name);
                Gesture::random()
            }
        };
        log::info!("[{}] throws {}", self.name, gesture);
        Some(gesture)
    }
    fn aware(&self) -> Option<&dyn Aware> {
        Some(self)
    }
}
