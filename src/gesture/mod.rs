//! Gesture rule.
//!
//! - [`Gesture`]: Rock, Paper or Scissors
//! - [`Outcome`]: Loss, Win or Tie
//! - [`compare`]: pairwise comparison where "no gesture" always loses
mod gesture;
mod outcome;
mod rule;

pub use gesture::*;
pub use outcome::*;
pub use rule::*;
