use crate::*;

/// Throws a uniformly random gesture as soon as it is asked.
#[derive(Debug)]
pub struct RandomPlayer {
    name: Name,
}

impl RandomPlayer {
    pub fn new<N: Into<Name>>(name: N) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Listener for RandomPlayer {
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
impl Player for RandomPlayer {
    fn name(&self) -> Name {
        self.name.clone()
    }
    async fn throw(&self) -> Option<Gesture> {
        let gesture = Gesture::random();
        log::info!("[{}] throws {}", self.name, gesture);
        Some(gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn always_throws() {
        let player = RandomPlayer::new("randy");
        assert_eq!(player.name(), Name::from("randy"));
        assert!(player.throw().await.is_some());
        assert!(player.aware().is_none());
    }
}
