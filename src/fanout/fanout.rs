use super::*;
use futures::future::BoxFuture;
use std::sync::Arc;

/// A single notification, run at most once by its own worker.
pub type Event = BoxFuture<'static, ()>;

/// The batch was cut short because the pool shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("broadcast abandoned")]
pub struct Abandoned;

/// Fair broadcaster.
///
/// Each event of a batch gets its own worker. Workers and the initiator
/// meet at a [`Latch`] sized `events + 1`, so no recipient starts handling
/// its event before every other recipient is scheduled and ready. The
/// initiator then waits for every worker to finish.
///
/// If the pool shuts down, the initiator returns [`Abandoned`] and workers
/// still parked at the rendezvous leave without running their event.
#[derive(Debug, Clone)]
pub struct Fanout {
    pool: Arc<Pool>,
}

impl Fanout {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
    pub fn pool(&self) -> &Arc<Pool> {
        &self.pool
    }
    pub async fn broadcast(&self, events: Vec<Event>) -> Result<(), Abandoned> {
        let token = self.pool.token();
        if token.is_cancelled() {
            return Err(Abandoned);
        }
        let latch = Arc::new(Latch::new(events.len() + 1));
        let workers = events
            .into_iter()
            .map(|event| {
                let latch = latch.clone();
                self.pool.spawn(async move {
                    latch.count_down();
                    latch.wait().await;
                    event.await;
                })
            })
            .collect::<Vec<_>>();
        log::trace!("[fanout] {} workers spawned", workers.len());
        latch.count_down();
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(Abandoned),
            results = futures::future::join_all(workers) => {
                results
                    .into_iter()
                    .filter_map(Result::err)
                    .for_each(|e| log::warn!("[fanout] recipient failed: {}", e));
                match token.is_cancelled() {
                    true => Err(Abandoned),
                    false => Ok(()),
                }
            }
        }
    }
}
