//! Core abstractions shared by the focus timer and its front ends.

mod clock;

pub use clock::{Clock, SystemClock};

#[cfg(test)]
pub use clock::MockClock;
