//! Board tiles.
//!
//! A tile is static data: kind, name, position, and a signed cost. Ownership
//! is not stored on the tile; it lives in the players' property lists and
//! the owner index kept by `GameState`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::{Player, PlayerId, PlayerMap};
use crate::error::SetupError;

/// The kind of a tile, which decides its effect when landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileKind {
    Go,
    Property,
    Jail,
    GoToJail,
    Tax,
    Blank,
}

impl TileKind {
    /// Keyword used in tile files.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            TileKind::Go => "GO",
            TileKind::Property => "PROPERTY",
            TileKind::Jail => "JAIL",
            TileKind::GoToJail => "GO_TO_JAIL",
            TileKind::Tax => "TAX",
            TileKind::Blank => "BLANK",
        }
    }
}

impl FromStr for TileKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GO" => Ok(TileKind::Go),
            "PROPERTY" => Ok(TileKind::Property),
            "JAIL" => Ok(TileKind::Jail),
            "GO_TO_JAIL" => Ok(TileKind::GoToJail),
            "TAX" => Ok(TileKind::Tax),
            "BLANK" => Ok(TileKind::Blank),
            other => Err(SetupError::InvalidTileType(other.to_string())),
        }
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single board tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub name: String,
    pub position: usize,
    /// Purchase price, tax, or GO pass fee. Debited as-is, so a negative
    /// cost credits the player.
    pub cost: i64,
}

impl Tile {
    /// Create a tile with no cost.
    pub fn new(kind: TileKind, name: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            position,
            cost: 0,
        }
    }

    /// Set the cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    pub fn go(cost: i64) -> Self {
        Self::new(TileKind::Go, "GO", 0).with_cost(cost)
    }

    pub fn property(name: impl Into<String>, position: usize, cost: i64) -> Self {
        Self::new(TileKind::Property, name, position).with_cost(cost)
    }

    pub fn tax(name: impl Into<String>, position: usize, cost: i64) -> Self {
        Self::new(TileKind::Tax, name, position).with_cost(cost)
    }

    pub fn blank(position: usize) -> Self {
        Self::new(TileKind::Blank, "BLANK", position)
    }

    /// Find the player owning this tile by scanning every property list.
    ///
    /// `GameState::owner_of` answers the same question from its index.
    #[must_use]
    pub fn find_owner(&self, players: &PlayerMap<Player>) -> Option<PlayerId> {
        players
            .iter()
            .find(|(_, player)| player.owns(self.position))
            .map(|(id, _)| id)
    }
}
