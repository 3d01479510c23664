use crate::*;

/// Observer that writes every notification to the log.
#[derive(Debug, Default)]
pub struct Narrator;

#[async_trait::async_trait]
impl Listener for Narrator {
    async fn countdown(&self, count: u32) {
        match count {
            0 => log::info!("[narrator] throw!"),
            n => log::info!("[narrator] {}...", n),
        }
    }
    async fn finished(&self, round: &Round) {
        log::info!("[narrator] {}", round);
    }
}

#[async_trait::async_trait]
impl Observer for Narrator {
    async fn thrown(&self, player: &Name, gesture: Gesture) {
        log::info!("[narrator] {} throws {}", player, gesture);
    }
}
