//! Referee Binary
//!
//! Seats the requested players, runs one round, and prints the result.
//! Ctrl+C stops the round.

use clap::Parser;
use scissors::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log(args.level());
    let referee = Referee::new(
        args.config(),
        args.players(),
        vec![Arc::new(Narrator) as Arc<dyn Observer>],
    );
    let interrupt = referee.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("[referee] interrupted");
            interrupt.stop();
        }
    });
    referee.start()?;
    referee.finished().await;
    let summary = referee.round().summary();
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&summary)?),
        false => println!("{}", cli::render(&summary)),
    }
    Ok(())
}
