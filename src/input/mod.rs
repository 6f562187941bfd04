//! Loading and validating game inputs.
//!
//! Three plain-text files describe a game:
//!
//! - players: `<name> <money>` per line
//! - tiles: `<TYPE> <name> [cost]` per line, the line order is the board order
//! - rolls: `PRINT` or `<d1> <d2>` per line
//!
//! Blank lines are skipped. Every rule is checked here, so the game loop
//! only ever sees valid records. An optional JSON rules file overrides
//! `RulesConfig` defaults.

mod players;
mod rolls;
mod tiles;

pub use players::parse_players;
pub use rolls::parse_rolls;
pub use tiles::parse_tiles;

use std::path::Path;

use tracing::info;

use crate::core::{Board, PlayerSeed, RollScript, RulesConfig};
use crate::error::SetupError;
use crate::game::Simulation;

/// Read a whole input file.
pub fn read_input(path: &Path) -> Result<String, SetupError> {
    std::fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON rules file.
pub fn load_rules(path: &Path) -> Result<RulesConfig, SetupError> {
    RulesConfig::from_json_str(&read_input(path)?)
}

/// Iterate over non-blank lines as (1-based line number, tokens).
fn tokenized_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

/// Everything needed to start a game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub players: Vec<PlayerSeed>,
    pub board: Board,
    pub rolls: RollScript,
    pub rules: RulesConfig,
}

impl GameSetup {
    /// Load and validate the three input files.
    pub fn load(
        players: &Path,
        tiles: &Path,
        rolls: &Path,
        rules: RulesConfig,
    ) -> Result<Self, SetupError> {
        rules.validate()?;

        let players = parse_players(&read_input(players)?, &rules)?;
        let board = parse_tiles(&read_input(tiles)?, &rules)?;
        let rolls = parse_rolls(&read_input(rolls)?)?;

        info!(
            players = players.len(),
            tiles = board.len(),
            rolls = rolls.len(),
            "game inputs loaded"
        );

        Ok(Self {
            players,
            board,
            rolls,
            rules,
        })
    }

    /// Start a game with the standard rules.
    #[must_use]
    pub fn into_simulation(self) -> Simulation {
        Simulation::new(&self.players, self.board, self.rolls, self.rules)
    }
}
