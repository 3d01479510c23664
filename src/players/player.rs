use crate::gesture::*;
use crate::round::*;
use std::sync::Arc;

/// Anything the referee notifies: participants and observers alike.
///
/// Notifications of one batch are delivered concurrently, one task per
/// recipient. A recipient may take as long as it likes inside a callback;
/// that only delays the end of the batch, never its siblings.
#[async_trait::async_trait]
pub trait Listener: Send + Sync {
    /// Called once per tick, from the configured start down to zero.
    /// At zero the throw window opens.
    async fn countdown(&self, count: u32);
    /// Called once the round is finished and every outcome is available.
    /// Never called for a stopped round.
    async fn finished(&self, round: &Round);
}

/// A participant in a round.
///
/// The referee asks every participant for a gesture at the same time.
/// Answering `None`, or not answering within [`Round::limit`], counts as
/// no throw, which loses against any gesture.
#[async_trait::async_trait]
pub trait Player: Listener {
    /// Stable identity, unique within a round.
    fn name(&self) -> Name;
    async fn throw(&self) -> Option<Gesture>;
    /// Opponent-aware capability, if this player has it.
    fn aware(&self) -> Option<&dyn Aware> {
        None
    }
}

/// Capability of players that want to watch their opponents.
///
/// Called once, when the referee is built and before the round starts,
/// with the shared round and every other participant's name.
pub trait Aware: Send + Sync {
    fn observe(&self, round: Arc<Round>, opponents: Vec<Name>);
}

/// A pure notification sink. Never asked for a gesture.
#[async_trait::async_trait]
pub trait Observer: Listener {
    /// A participant's gesture has been recorded.
    async fn thrown(&self, player: &Name, gesture: Gesture);
}
