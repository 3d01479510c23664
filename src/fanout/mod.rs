//! Fairness barrier.
//!
//! - [`Latch`]: count-down rendezvous
//! - [`Pool`]: cancellable task pool scoped to one round
//! - [`Fanout`]: broadcast where no recipient gets a head start
mod fanout;
mod latch;
mod pool;

pub use fanout::*;
pub use latch::*;
pub use pool::*;
