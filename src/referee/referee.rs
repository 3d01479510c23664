use super::*;
use crate::fanout::*;
use crate::gesture::*;
use crate::players::*;
use crate::round::*;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Round coordinator.
///
/// Owns the [`Round`] transitions and drives it on its own task:
///
/// - Counting: one fair broadcast per tick, from the configured start down to zero
/// - Throwing: every participant is asked concurrently; each recorded gesture
///   is rebroadcast to observers; the window closes at the throw limit or as
///   soon as everyone has thrown
/// - Finished: no more gestures are accepted; once the gesture broadcasts in
///   flight have completed, outcomes are tallied, recorded, and broadcast to everyone
///
/// [`Referee::stop`] may be called at any time from anywhere. It forces the
/// round to Stopped and shuts the round's task pool down, which abandons the
/// batch in flight and releases every parked worker.
///
/// Cloning is cheap; every clone refers to the same round.
#[derive(Clone)]
pub struct Referee {
    round: Arc<Round>,
    players: Arc<[Arc<dyn Player>]>,
    observers: Arc<[Arc<dyn Observer>]>,
    fanout: Fanout,
    done: CancellationToken,
}

/// Why the driver left the round early.
#[derive(Debug)]
enum Halt {
    Stopped,
    Fault(RoundError),
}

impl From<Abandoned> for Halt {
    fn from(_: Abandoned) -> Self {
        Self::Stopped
    }
}

impl From<RoundError> for Halt {
    fn from(e: RoundError) -> Self {
        Self::Fault(e)
    }
}

impl Referee {
    /// Seats the participants (first occurrence of a name wins) and lets
    /// every opponent-aware participant observe the round.
    pub fn new(
        config: RoundConfig,
        players: Vec<Arc<dyn Player>>,
        observers: Vec<Arc<dyn Observer>>,
    ) -> Self {
        let mut seated = std::collections::HashSet::new();
        let players = players
            .into_iter()
            .filter(|p| seated.insert(p.name()))
            .collect::<Vec<_>>();
        let round = Arc::new(Round::new(config, players.iter().map(|p| p.name())));
        for player in players.iter() {
            if let Some(aware) = player.aware() {
                let name = player.name();
                let opponents = round
                    .players()
                    .iter()
                    .filter(|n| **n != name)
                    .cloned()
                    .collect();
                aware.observe(round.clone(), opponents);
            }
        }
        Self {
            round,
            players: Arc::from(players),
            observers: Arc::from(observers),
            fanout: Fanout::new(Arc::new(Pool::new())),
            done: CancellationToken::new(),
        }
    }
    pub fn round(&self) -> &Arc<Round> {
        &self.round
    }
    /// Starts counting on a background task. Must be called inside a Tokio runtime.
    pub fn start(&self) -> Result<(), RoundError> {
        self.round.begin()?;
        log::info!("[referee] starting {}", self.round);
        self.pool().spawn(self.clone().run());
        Ok(())
    }
    /// Forcibly stops the round. Idempotent, never fails.
    pub fn stop(&self) {
        match self.round.stop() {
            Phase::Stopped => log::debug!("[referee] already stopped"),
            phase => log::info!("[referee] stopping round while {}", phase),
        }
        self.pool().shutdown();
        self.done.cancel();
    }
    /// Resolves once the round is finished or stopped.
    pub async fn finished(&self) {
        self.done.cancelled().await
    }
    /// Waits at most `limit` for the round to end and reports where it is.
    pub async fn wait(&self, limit: Duration) -> Phase {
        log::debug!("[referee] waiting for the round to end");
        let _ = tokio::time::timeout(limit, self.finished()).await;
        self.round.phase()
    }
}

impl Referee {
    async fn run(self) {
        match self.officiate().await {
            Ok(()) => log::info!("[referee] finished {}", self.round),
            Err(Halt::Stopped) => log::info!("[referee] round stopped"),
            Err(Halt::Fault(_)) if self.round.phase() == Phase::Stopped => {
                log::info!("[referee] round stopped")
            }
            Err(Halt::Fault(e)) => {
                log::error!("[referee] aborting round: {}", e);
                self.round.stop();
            }
        }
        self.done.cancel();
        self.pool().shutdown();
    }
    async fn officiate(&self) -> Result<(), Halt> {
        self.count().await?;
        self.collect().await?;
        self.settle().await
    }
    async fn count(&self) -> Result<(), Halt> {
        self.round.advance(Phase::Counting)?;
        for count in (0..=self.round.countdown()).rev() {
            self.announce(count).await?;
            if count > 0 {
                self.pause(self.round.between()).await?;
            }
        }
        Ok(())
    }
    async fn collect(&self) -> Result<(), Halt> {
        self.round.advance(Phase::Throwing)?;
        let stop = self.pool().token();
        let ready = stop.child_token();
        let tracker = TaskTracker::new();
        for player in self.players.iter() {
            self.pool().spawn(
                self.clone()
                    .solicit(player.clone(), ready.clone(), tracker.clone()),
            );
        }
        if self.round.is_ready() {
            ready.cancel();
        }
        tokio::select! {
            biased;
            _ = stop.cancelled() => return Err(Halt::Stopped),
            _ = ready.cancelled() => log::debug!("[referee] every gesture is in"),
            _ = tokio::time::sleep(self.round.limit()) => log::debug!("[referee] throw limit elapsed"),
        }
        self.close(&stop, &tracker).await
    }
    /// Shuts the throw window, then lets every recorded gesture finish
    /// its broadcast before the results go out.
    async fn close(&self, stop: &CancellationToken, tracker: &TaskTracker) -> Result<(), Halt> {
        self.round.advance(Phase::Finished)?;
        tracker.close();
        log::debug!("[referee] draining {} gesture broadcasts", tracker.len());
        tokio::select! {
            biased;
            _ = stop.cancelled() => Err(Halt::Stopped),
            _ = tracker.wait() => Ok(()),
        }
    }
    async fn settle(&self) -> Result<(), Halt> {
        for (name, outcome) in tally(&self.round.throws()) {
            self.round.record_outcome(&name, outcome)?;
        }
        let events = self
            .listeners()
            .map(|listener| {
                let round = self.round.clone();
                Box::pin(async move { listener.finished(&round).await }) as Event
            })
            .collect();
        Ok(self.fanout.broadcast(events).await?)
    }
}

impl Referee {
    async fn announce(&self, count: u32) -> Result<(), Halt> {
        log::debug!("[referee] countdown {}", count);
        let events = self
            .listeners()
            .map(|listener| Box::pin(async move { listener.countdown(count).await }) as Event)
            .collect();
        Ok(self.fanout.broadcast(events).await?)
    }
    async fn pause(&self, duration: Duration) -> Result<(), Halt> {
        let stop = self.pool().token();
        tokio::select! {
            biased;
            _ = stop.cancelled() => Err(Halt::Stopped),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
    /// Asks one participant for a gesture, bounded by the throw limit.
    /// The throw runs on its own task so a panicking participant is
    /// contained and logged like any other recipient.
    async fn solicit(self, player: Arc<dyn Player>, ready: CancellationToken, tracker: TaskTracker) {
        let name = player.name();
        let limit = self.round.limit();
        let asked = self
            .pool()
            .spawn(async move { tokio::time::timeout(limit, player.throw()).await });
        match asked.await {
            Ok(Some(Ok(Some(gesture)))) => self.receive(&name, gesture, &ready, &tracker).await,
            Ok(Some(Ok(None))) => log::debug!("[referee] {} did not throw", name),
            Ok(Some(Err(_))) => log::debug!("[referee] {} missed the throw limit", name),
            Ok(None) => log::debug!("[referee] {} was not heard before the stop", name),
            Err(e) => log::warn!("[referee] {} failed to throw: {}", name, e),
        }
    }
    /// Records a gesture, tells the observers, and closes the window early
    /// once everybody has thrown.
    ///
    /// The tracker token is taken before the gesture is recorded, so once
    /// the window is shut every counted gesture is already being tracked.
    async fn receive(&self, name: &Name, gesture: Gesture, ready: &CancellationToken, tracker: &TaskTracker) {
        let _inflight = tracker.token();
        match self.round.record_gesture(name, gesture) {
            Ok(true) => log::debug!("[referee] {} threw {}", name, gesture),
            Ok(false) => return log::debug!("[referee] {} threw outside the window", name),
            Err(e) => return log::error!("[referee] rejected gesture: {}", e),
        }
        let events = self
            .observers
            .iter()
            .cloned()
            .map(|observer| {
                let name = name.clone();
                Box::pin(async move { observer.thrown(&name, gesture).await }) as Event
            })
            .collect();
        if self.fanout.broadcast(events).await.is_err() {
            return;
        }
        if self.round.is_ready() {
            ready.cancel();
        }
    }
    fn listeners(&self) -> impl Iterator<Item = Arc<dyn Listener>> + '_ {
        self.players
            .iter()
            .cloned()
            .map(|p| p as Arc<dyn Listener>)
            .chain(self.observers.iter().cloned().map(|o| o as Arc<dyn Listener>))
    }
    fn pool(&self) -> &Arc<Pool> {
        self.fanout.pool()
    }
}
