//! Rotation generation: seed or resume, truncate, extend.
//!
//! [`generate`] is a pure function of a [`Schedule`](crate::Schedule) and a
//! reference instant. It never touches its input; the round-robin roster and
//! the next start time are advanced on a private working copy.

mod core;
mod horizon;
mod roster;
mod state;
mod truncate;

pub use core::generate;
pub use horizon::num_rotations;
pub use roster::Roster;
pub use state::GeneratorState;
pub use truncate::truncate;
