use crate::*;

/// Always throws the same gesture. Handy for demos and scripted seats.
#[derive(Debug)]
pub struct FixedPlayer {
    name: Name,
    gesture: Gesture,
}

impl FixedPlayer {
    pub fn new<N: Into<Name>>(name: N, gesture: Gesture) -> Self {
        Self {
            name: name.into(),
            gesture,
        }
    }
}

#[async_trait::async_trait]
impl Listener for FixedPlayer {
    async fn countdown(&self, _: u32) {}
    async fn finished(&self, round: &Round) {
        log::debug!(
            "[{}] result: {}",
            self.name,
            round
                .outcome(&self.name)
                .map(|o| o.to_string())
                .unwrap_or_else(|| String::from("none"))
        );
    }
}

#[async_trait::async_trait]
impl Player for FixedPlayer {
    fn name(&self) -> Name {
        self.name.clone()
    }
    async fn throw(&self) -> Option<Gesture> {
        Some(self.gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn always_the_same() {
        let player = FixedPlayer::new("rocky", Gesture::Rock);
        for _ in 0..3 {
            assert_eq!(player.throw().await, Some(Gesture::Rock));
        }
        assert!(player.aware().is_none());
    }
}
