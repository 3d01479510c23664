//! Scripted collaborator that remembers every notification it receives.
use crate::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heard {
    Countdown(u32),
    Thrown(Name, Gesture),
    Finished(Phase),
    Observed(Vec<Name>),
}

/// Plays a fixed script: answers `gesture` after `delay`, or never answers
/// when `delay` is `None`.
#[derive(Debug)]
pub struct Recorder {
    name: Name,
    gesture: Option<Gesture>,
    delay: Option<Duration>,
    aware: bool,
    panics: bool,
    lag: Duration,
    heard: Mutex<Vec<Heard>>,
}

impl Recorder {
    pub fn throwing(name: &str, gesture: Gesture) -> Self {
        Self {
            name: Name::from(name),
            gesture: Some(gesture),
            delay: Some(Duration::ZERO),
            aware: false,
            panics: false,
            lag: Duration::ZERO,
            heard: Mutex::new(Vec::new()),
        }
    }
    /// Declines to throw, answering `None` immediately.
    pub fn declining(name: &str) -> Self {
        Self {
            gesture: None,
            ..Self::throwing(name, Gesture::Rock)
        }
    }
    /// Never answers at all.
    pub fn silent(name: &str) -> Self {
        Self {
            delay: None,
            ..Self::throwing(name, Gesture::Rock)
        }
    }
    /// Panics instead of answering.
    pub fn panicking(name: &str) -> Self {
        Self {
            panics: true,
            ..Self::throwing(name, Gesture::Rock)
        }
    }
    pub fn observer() -> Self {
        Self::silent("observer")
    }
    pub fn after(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }
    pub fn watching(self) -> Self {
        Self {
            aware: true,
            ..self
        }
    }
    /// Takes `lag` to handle each thrown gesture; it is remembered only
    /// once handled.
    pub fn lagging(self, lag: Duration) -> Self {
        Self { lag, ..self }
    }
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
    pub fn heard(&self) -> Vec<Heard> {
        self.heard.lock().unwrap().clone()
    }
    pub fn countdowns(&self) -> Vec<u32> {
        self.heard()
            .into_iter()
            .filter_map(|h| match h {
                Heard::Countdown(n) => Some(n),
                _ => None,
            })
            .collect()
    }
    pub fn finishes(&self) -> usize {
        self.heard()
            .iter()
            .filter(|h| matches!(h, Heard::Finished(_)))
            .count()
    }
    fn hear(&self, heard: Heard) {
        self.heard.lock().unwrap().push(heard);
    }
}

#[async_trait::async_trait]
impl Listener for Recorder {
    async fn countdown(&self, count: u32) {
        self.hear(Heard::Countdown(count));
    }
    async fn finished(&self, round: &Round) {
        self.hear(Heard::Finished(round.phase()));
    }
}

#[async_trait::async_trait]
impl Player for Recorder {
    fn name(&self) -> Name {
        self.name.clone()
    }
    async fn throw(&self) -> Option<Gesture> {
        if self.panics {
            panic!("{} fumbled", self.name);
        }
        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => std::future::pending::<()>().await,
        }
        self.gesture
    }
    fn aware(&self) -> Option<&dyn Aware> {
        match self.aware {
            true => Some(self),
            false => None,
        }
    }
}

impl Aware for Recorder {
    fn observe(&self, _: Arc<Round>, opponents: Vec<Name>) {
        self.hear(Heard::Observed(opponents));
    }
}

#[async_trait::async_trait]
impl Observer for Recorder {
    async fn thrown(&self, player: &Name, gesture: Gesture) {
        tokio::time::sleep(self.lag).await;
        self.hear(Heard::Thrown(player.clone(), gesture));
    }
}
