//! Collaborators of the referee.
//!
//! - [`Listener`]: countdown and result notifications
//! - [`Player`]: a participant, asked for a gesture
//! - [`Aware`]: optional capability to watch opponents
//! - [`Observer`]: a notification sink, told about every recorded gesture
//!
//! Stock implementations: [`RandomPlayer`], [`SmartPlayer`], [`FixedPlayer`], [`Narrator`].
mod fixed;
mod narrator;
mod player;
mod random;
mod smart;

#[cfg(test)]
pub mod recorder;

pub use fixed::*;
pub use narrator::*;
pub use player::*;
pub use random::*;
pub use smart::*;
