use std::future::Future;
use std::sync::Mutex;
use std::sync::PoisonError;
use tokio::task::AbortHandle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Task pool scoped to one round.
///
/// Every task spawned here races the pool's cancellation token, and its
/// abort handle is kept so that [`Pool::shutdown`] can also tear down tasks
/// parked inside a collaborator's callback.
#[derive(Debug, Default)]
pub struct Pool {
    token: CancellationToken,
    handles: Mutex<Vec<AbortHandle>>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }
    /// Cancelled exactly when the pool shuts down.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
    pub fn is_shutdown(&self) -> bool {
        self.token.is_cancelled()
    }
    /// Tasks spawned and not yet finished.
    pub fn active(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }
    /// Spawns a task that resolves to `None` if the pool shuts down first.
    pub fn spawn<F, T>(&self, fut: F) -> JoinHandle<Option<T>>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let token = self.token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                out = fut => Some(out),
            }
        });
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        handles.retain(|h| !h.is_finished());
        handles.push(handle.abort_handle());
        handle
    }
    /// Cancels and aborts everything. Idempotent.
    pub fn shutdown(&self) {
        self.token.cancel();
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .for_each(|h| h.abort());
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fanout::Latch;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[tokio::test]
    async fn runs_to_completion() {
        let pool = Pool::new();
        assert_eq!(pool.spawn(async { 7 }).await.unwrap(), Some(7));
    }
    #[tokio::test]
    async fn cancelled_after_shutdown() {
        let pool = Pool::new();
        pool.shutdown();
        assert!(pool.is_shutdown());
        assert_eq!(pool.spawn(async { 7 }).await.unwrap(), None);
    }
    #[tokio::test]
    async fn shutdown_releases_pending_tasks() {
        let pool = Pool::new();
        let handle = pool.spawn(std::future::pending::<()>());
        tokio::task::yield_now().await;
        assert_eq!(pool.active(), 1);
        pool.shutdown();
        let joined = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(joined.is_ok());
        assert_eq!(pool.active(), 0);
        pool.shutdown();
    }
    #[tokio::test]
    async fn parked_worker_never_acts() {
        let pool = Pool::new();
        let latch = Arc::new(Latch::new(2));
        let acted = Arc::new(AtomicBool::new(false));
        let handle = {
            let latch = latch.clone();
            let acted = acted.clone();
            pool.spawn(async move {
                latch.count_down();
                latch.wait().await;
                acted.store(true, Ordering::SeqCst);
            })
        };
        tokio::task::yield_now().await;
        assert_eq!(latch.count(), 1);
        pool.shutdown();
        let joined = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(joined.is_ok());
        latch.count_down();
        tokio::task::yield_now().await;
        assert!(!acted.load(Ordering::SeqCst));
        assert_eq!(pool.active(), 0);
    }
}
