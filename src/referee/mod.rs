//! Round coordination.
//!
//! - [`Referee`]: drives one round through countdown, throws and results
//! - [`tally`]: outcome of every participant from the recorded gestures
mod referee;
mod tally;

pub use referee::*;
pub use tally::*;
