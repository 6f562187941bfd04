//! Tiles file.

use super::tokenized_lines;
use crate::core::{Board, RulesConfig, Tile, TileKind};
use crate::error::SetupError;

/// Parse `<TYPE> <name> [cost]` lines into a board. Positions follow line
/// order, counting only non-blank lines.
pub fn parse_tiles(text: &str, rules: &RulesConfig) -> Result<Board, SetupError> {
    let mut tiles = Vec::new();

    for (line, tokens) in tokenized_lines(text) {
        let (kind, name, cost) = match tokens.as_slice() {
            &[kind, name] => (kind, name, None),
            &[kind, name, cost] => (kind, name, Some(cost)),
            _ => return Err(SetupError::MalformedTile { line }),
        };

        let kind: TileKind = kind.parse()?;
        let cost = match cost {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| SetupError::InvalidTileCost(raw.to_string()))?,
            None => 0,
        };

        tiles.push(Tile::new(kind, name, tiles.len()).with_cost(cost));
    }

    Board::new(tiles, rules)
}
