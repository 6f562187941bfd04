//! The board: a fixed-length cycle of tiles.
//!
//! `Board::new` is the only constructor and enforces the structure the
//! engine relies on: contiguous positions, GO at position 0, exactly one
//! JAIL and one GO_TO_JAIL tile, and the configured board length.

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use super::tile::{Tile, TileKind};
use crate::error::SetupError;

/// An ordered, validated sequence of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    jail: usize,
    go_to_jail: usize,
}

impl Board {
    /// Build a board from tiles in position order.
    ///
    /// Checks run in the order a tile file is usually fixed: positions,
    /// the GO start, the special tiles, then the board length.
    pub fn new(tiles: Vec<Tile>, rules: &RulesConfig) -> Result<Self, SetupError> {
        for (expected, tile) in tiles.iter().enumerate() {
            if tile.position != expected {
                return Err(SetupError::TilePosition {
                    name: tile.name.clone(),
                    expected,
                    found: tile.position,
                });
            }
        }

        if tiles.first().map(|t| t.kind) != Some(TileKind::Go) {
            return Err(SetupError::MissingGoStart);
        }

        let count = |kind: TileKind| tiles.iter().filter(|t| t.kind == kind).count();
        if count(TileKind::Go) != 1 || count(TileKind::Jail) != 1 || count(TileKind::GoToJail) != 1 {
            return Err(SetupError::SpecialTiles);
        }

        if tiles.len() != rules.board_size {
            return Err(SetupError::BoardSize {
                expected: rules.board_size,
                found: tiles.len(),
            });
        }

        let position_of = |kind: TileKind| {
            tiles
                .iter()
                .position(|t| t.kind == kind)
                .ok_or(SetupError::SpecialTiles)
        };
        let jail = position_of(TileKind::Jail)?;
        let go_to_jail = position_of(TileKind::GoToJail)?;

        Ok(Self {
            tiles,
            jail,
            go_to_jail,
        })
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `position`. Positions come from the board itself, so they
    /// are always in range.
    #[must_use]
    pub fn tile(&self, position: usize) -> &Tile {
        &self.tiles[position]
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The GO tile (always position 0).
    #[must_use]
    pub fn go(&self) -> &Tile {
        &self.tiles[0]
    }

    /// Position of the JAIL tile.
    #[must_use]
    pub fn jail(&self) -> usize {
        self.jail
    }

    /// Position of the GO_TO_JAIL tile.
    #[must_use]
    pub fn go_to_jail(&self) -> usize {
        self.go_to_jail
    }
}
