use tokio::sync::watch;

/// Count-down rendezvous.
///
/// Starts at `n`; every party calls [`Latch::count_down`] once and then
/// [`Latch::wait`]s. Nobody gets past `wait` before all `n` parties have
/// counted down. Once open, a latch stays open.
#[derive(Debug)]
pub struct Latch {
    count: watch::Sender<usize>,
}

impl Latch {
    pub fn new(n: usize) -> Self {
        let (count, _) = watch::channel(n);
        Self { count }
    }
    /// Parties still expected at the rendezvous.
    pub fn count(&self) -> usize {
        *self.count.borrow()
    }
    pub fn is_open(&self) -> bool {
        self.count() == 0
    }
    pub fn count_down(&self) {
        self.count.send_modify(|n| *n = n.saturating_sub(1));
    }
    /// Resolves once the count has reached zero.
    /// Dropping the future abandons the wait without side effects.
    pub async fn wait(&self) {
        let mut rx = self.count.subscribe();
        let _ = rx.wait_for(|n| *n == 0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[tokio::test]
    async fn zero_is_open() {
        let latch = Latch::new(0);
        assert!(latch.is_open());
        latch.wait().await;
    }
    #[tokio::test]
    async fn counts_saturate() {
        let latch = Latch::new(1);
        latch.count_down();
        latch.count_down();
        assert_eq!(latch.count(), 0);
        latch.wait().await;
    }
    #[tokio::test]
    async fn closed_until_last_party() {
        let latch = Latch::new(2);
        latch.count_down();
        let waited = tokio::time::timeout(Duration::from_millis(20), latch.wait()).await;
        assert!(waited.is_err());
        latch.count_down();
        latch.wait().await;
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn nobody_passes_before_everyone_arrives() {
        const K: usize = 16;
        let latch = Arc::new(Latch::new(K));
        let arrived = Arc::new(AtomicUsize::new(0));
        let handles = (0..K)
            .map(|_| {
                let latch = latch.clone();
                let arrived = arrived.clone();
                tokio::spawn(async move {
                    let delay = rand::random_range(0..25);
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    arrived.fetch_add(1, Ordering::SeqCst);
                    latch.count_down();
                    latch.wait().await;
                    arrived.load(Ordering::SeqCst)
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), K);
        }
    }
}
