//! Command line surface of the `referee` binary.
use crate::*;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about = "Referee one round of rock-paper-scissors", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = COUNTDOWN_START, help = "Countdown ticks before the throw")]
    pub countdown: u32,
    #[arg(long, default_value_t = TIME_BETWEEN_COUNTS, help = "Pause between ticks (ms)")]
    pub between: u64,
    #[arg(long, default_value_t = THROW_TIME_LIMIT, help = "Throw window (ms)")]
    pub limit: u64,
    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
    #[arg(short, long, help = "Log every notification")]
    pub verbose: bool,
    #[arg(required = true, help = "Seats as kind:name (random, smart, rock, paper, scissors)")]
    pub seats: Vec<Seat>,
}

impl Args {
    pub fn config(&self) -> RoundConfig {
        RoundConfig::new(
            self.countdown,
            Duration::from_millis(self.between),
            Duration::from_millis(self.limit),
        )
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }
    pub fn players(&self) -> Vec<Arc<dyn Player>> {
        self.seats.iter().map(Seat::player).collect()
    }
}

/// One participant requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    Random(String),
    Smart(String),
    Fixed(String, Gesture),
}

impl Seat {
    pub fn name(&self) -> &str {
        match self {
            Self::Random(name) | Self::Smart(name) | Self::Fixed(name, _) => name,
        }
    }
    pub fn player(&self) -> Arc<dyn Player> {
        match self {
            Self::Random(name) => Arc::new(RandomPlayer::new(name.as_str())),
            Self::Smart(name) => Arc::new(SmartPlayer::new(name.as_str())),
            Self::Fixed(name, gesture) => Arc::new(FixedPlayer::new(name.as_str(), *gesture)),
        }
    }
}

impl std::str::FromStr for Seat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = s
            .split_once(':')
            .ok_or_else(|| format!("expected kind:name, got {}", s))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("seat {} has no name", s));
        }
        let name = name.to_string();
        match kind.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random(name)),
            "smart" => Ok(Self::Smart(name)),
            other => Gesture::try_from(other)
                .map(|gesture| Self::Fixed(name, gesture))
                .map_err(|_| format!("unknown seat kind {}", other)),
        }
    }
}

/// Coloured, human readable rendering of a finished or stopped round.
pub fn render(summary: &Summary) -> String {
    let mut lines = vec![match summary.phase {
        Phase::Finished => format!("round {}", summary.phase).green().bold().to_string(),
        phase => format!("round {}", phase).yellow().bold().to_string(),
    }];
    for entry in summary.players.iter() {
        let gesture = entry.gesture.map(|g| g.label()).unwrap_or("nothing");
        let outcome = match entry.outcome {
            Some(Outcome::Win) => "win".green().to_string(),
            Some(Outcome::Loss) => "loss".red().to_string(),
            Some(Outcome::Tie) => "tie".blue().to_string(),
            None => "-".dimmed().to_string(),
        };
        lines.push(format!("  {:<16} {:<10} {}", entry.name, gesture, outcome));
    }
    lines.join("\n")
}
