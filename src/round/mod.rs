//! Round state.
//!
//! - [`Round`]: phase, gestures and outcomes behind a single lock
//! - [`Phase`]: NotStarted → Counting → Throwing → Finished, or Stopped from anywhere
//! - [`RoundConfig`]: countdown, pause between ticks, throw limit
//! - [`RoundError`]: rejected transitions and writes
//! - [`Summary`]: serializable snapshot
mod config;
mod error;
mod name;
mod phase;
mod round;
mod summary;

pub use config::*;
pub use error::*;
pub use name::*;
pub use phase::*;
pub use round::*;
pub use summary::*;
