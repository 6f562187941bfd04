//! Error types.
//!
//! Setup errors are raised while loading and validating the inputs of a
//! simulation. Once a `Simulation` exists the game itself cannot fail:
//! bankruptcy and running out of rolls are ordinary outcomes. The only
//! errors left at that point come from writing reports.

use std::path::PathBuf;

use thiserror::Error;

/// A problem with the players, tiles, rolls, or rules supplied to a game.
///
/// Messages are meant to be shown to the user verbatim.
#[derive(Debug, Error)]
pub enum SetupError {
    /// An input file could not be read.
    #[error("You have specified an invalid configuration path: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A player line is not `<name> <money>`.
    #[error("Invalid player entry on line {line}: expected `<name> <money>`")]
    MalformedPlayer { line: usize },

    #[error("Player Names cannot be longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("Amount of money each player has must be an integer between [{min}, {max}]")]
    InvalidMoney { min: i64, max: i64 },

    #[error("Number of players must be between [{min}, {max}]")]
    PlayerCount { min: usize, max: usize },

    /// A tile line is not `<TYPE> <name> [cost]`.
    #[error("Invalid tile entry on line {line}: expected `<TYPE> <name> [cost]`")]
    MalformedTile { line: usize },

    #[error("Invalid tile type: {0}")]
    InvalidTileType(String),

    #[error("Invalid tile cost: {0}")]
    InvalidTileCost(String),

    #[error("The board must start with a GO tile")]
    MissingGoStart,

    #[error("The board must strictly have 1 GO, 1 GO_TO_JAIL and 1 JAIL tiles")]
    SpecialTiles,

    #[error("The board must have exactly {expected} tiles, found {found}")]
    BoardSize { expected: usize, found: usize },

    /// Tile positions must be 0, 1, 2, ... in board order.
    #[error("Tile {name} is at position {found}, expected {expected}")]
    TilePosition {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid dice roll command: {0}")]
    InvalidRollCommand(String),

    #[error("Invalid dice roll value: {0}")]
    InvalidRollValue(String),

    #[error("PRINT must be the first and last command in the file")]
    PrintBookends,

    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    #[error("Invalid rules file: {0}")]
    RulesFormat(#[from] serde_json::Error),
}

/// A failure while writing a snapshot or the final verdict.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}
