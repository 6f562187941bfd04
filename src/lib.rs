//! # monopoly-sim
//!
//! A deterministic Monopoly-style board game simulator. A game is fully
//! described by three input files (players, tiles, dice rolls), so the same
//! inputs always produce the same report.
//!
//! ## Design Principles
//!
//! 1. **Scripted, not random**: dice come from a roll script. `PRINT`
//!    entries in the script request a status snapshot.
//!
//! 2. **Validated at the edge**: `input` rejects every malformed record
//!    before a game starts. Nothing past it re-checks.
//!
//! 3. **Explicit turn state**: the game loop is a `Phase` state machine,
//!    one transition per `Simulation::step`.
//!
//! ## Modules
//!
//! - `core`: players, tiles, board, rolls, configuration, state, events
//! - `rules`: `RulesEngine` trait and the standard rules
//! - `game`: the turn loop
//! - `report`: status sinks (table, JSON lines, in-memory)
//! - `input`: file parsing and validation
//! - `error`: setup and reporting errors

pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, DiceRoll, GameEvent, GameState, JailCause, Player, PlayerId, PlayerMap, PlayerSeed,
    RollEntry, RollScript, RulesConfig, Tile, TileKind,
};

pub use crate::error::{ReportError, SetupError};

pub use crate::game::{Phase, Simulation};

pub use crate::input::{load_rules, parse_players, parse_rolls, parse_tiles, GameSetup};

pub use crate::report::{JsonLinesReporter, PlayerRow, Recorder, Snapshot, StatusSink, TableReporter};

pub use crate::rules::{GameResult, RulesEngine, StandardRules, TurnOutcome};
