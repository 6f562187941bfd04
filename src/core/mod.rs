//! Core data types: players, tiles, board, rolls, configuration, state.
//!
//! Everything here is plain data plus the primitive mutations the turn
//! engine is built from. Game rules live in `rules`, the turn loop in `game`.

pub mod board;
pub mod config;
pub mod event;
pub mod player;
pub mod roll;
pub mod state;
pub mod tile;

pub use board::Board;
pub use config::RulesConfig;
pub use event::{GameEvent, JailCause};
pub use player::{Player, PlayerId, PlayerMap, PlayerSeed};
pub use roll::{DiceRoll, RollEntry, RollScript};
pub use state::GameState;
pub use tile::{Tile, TileKind};
