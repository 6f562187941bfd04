//! Rules engine for turn resolution.
//!
//! `RulesEngine` defines how a single roll changes the game:
//! - Movement around the board and GO fees
//! - Tile effects (purchase, rent, tax, jail)
//! - Bankruptcy
//!
//! The game loop in `game` calls into `RulesEngine` but never interprets
//! tile effects directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine, StandardRules, TurnOutcome};
