//! The game loop.
//!
//! `Simulation` drives a roll script against the player rotation as an
//! explicit state machine (`Phase`), delegating each real roll to a
//! `RulesEngine` and each snapshot to a `StatusSink`.

mod phase;
mod simulation;

pub use phase::Phase;
pub use simulation::{Simulation, CHAIN_LOOKAHEAD};
