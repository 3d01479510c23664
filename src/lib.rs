//! Fair, race-free referee for multi-party rock-paper-scissors.
//!
//! A [`Referee`] drives a shared [`Round`] through its phases, broadcasting
//! countdown ticks, gesture requests and results to every participant and
//! observer at the same instant, collecting gestures under a deadline, and
//! honouring forced cancellation from any thread of control.
//!
//! ## Architecture
//!
//! - [`gesture`]: Gesture rule: pairwise comparison under the rock/paper/scissors cycle
//! - [`round`]: Round state: phase, gestures and outcomes behind one lock
//! - [`fanout`]: Fairness barrier: count-down rendezvous broadcast over a scoped task pool
//! - [`referee`]: Round coordinator: the phase driver and the N-ary tally
//! - [`players`]: Collaborator traits and stock players/observers

pub mod fanout;
pub mod gesture;
pub mod players;
pub mod referee;
pub mod round;

#[cfg(feature = "cli")]
pub mod cli;

pub use fanout::*;
pub use gesture::*;
pub use players::*;
pub use referee::*;
pub use round::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for stock strategies and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ROUND DEFAULTS
// A short countdown, then a two second window.
// ============================================================================
/// Countdown ticks from this value down to zero.
pub const COUNTDOWN_START: u32 = 2;
/// Pause between two countdown ticks (milliseconds).
pub const TIME_BETWEEN_COUNTS: u64 = 1000;
/// Window in which every participant must throw (milliseconds).
pub const THROW_TIME_LIMIT: u64 = 2000;

// ============================================================================
// SMART STRATEGY
// ============================================================================
/// Margin kept before the throw limit when waiting on an opponent (milliseconds).
pub const SAFE_LIMIT_DELTA: u64 = 150;
/// Interval between two peeks at the opponents' gestures (milliseconds).
pub const POLL_INTERVAL: u64 = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target and thread columns are suppressed to keep lines short.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("logger already initialized: {}", e));
}
