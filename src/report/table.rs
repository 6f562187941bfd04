//! Fixed-width console table.
//!
//! ```text
//! -----------------------------------------------------------------------
//! | NAME      | POS  | BANKRUPT | MONEY  | PROPERTIES                   |
//! | alice     | 6    | False    | 1440   | [⏩🏠. . ...                  |
//! -----------------------------------------------------------------------
//! alice won!
//! ```
//!
//! The properties column is a strip with one cell per tile: `. ` for an
//! unowned tile, a house for an owned one, and fixed markers for GO, JAIL
//! and GO_TO_JAIL.

use std::io::Write;

use super::{PlayerRow, Snapshot, StatusSink};
use crate::core::Board;
use crate::error::ReportError;
use crate::rules::GameResult;

const EMPTY_CELL: &str = ". ";
const OWNED_CELL: &str = "\u{1F3E0}";
const GO_CELL: &str = "\u{23E9}";
const JAIL_CELL: &str = "\u{1F3F0}";
const GO_TO_JAIL_CELL: &str = "\u{1F693}";

/// Writes snapshots as tables.
pub struct TableReporter<W: Write> {
    out: W,
    board_len: usize,
    go: usize,
    jail: usize,
    go_to_jail: usize,
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W, board: &Board) -> Self {
        Self {
            out,
            board_len: board.len(),
            go: 0,
            jail: board.jail(),
            go_to_jail: board.go_to_jail(),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn header() -> String {
        format!(
            "| {:<10}| {:<5}| {:<9}| {:<7}| {:<82} |",
            "NAME", "POS", "BANKRUPT", "MONEY", "PROPERTIES"
        )
    }

    /// Property strip for one player, wrapped in brackets.
    fn strip(&self, properties: &[usize]) -> String {
        let mut cells = vec![EMPTY_CELL; self.board_len];
        for &position in properties {
            if let Some(cell) = cells.get_mut(position) {
                *cell = OWNED_CELL;
            }
        }
        cells[self.go] = GO_CELL;
        cells[self.jail] = JAIL_CELL;
        cells[self.go_to_jail] = GO_TO_JAIL_CELL;

        format!("[{}]", cells.concat())
    }

    fn row(&self, player: &PlayerRow) -> String {
        let bankrupt = if player.bankrupt { "True" } else { "False" };
        format!(
            "| {:<10}| {:<5}| {:<9}| {:<7}| {:<42} |",
            player.name,
            player.position.to_string(),
            bankrupt,
            player.money.to_string(),
            self.strip(&player.properties)
        )
    }
}

impl<W: Write> StatusSink for TableReporter<W> {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        let header = Self::header();
        let rule = "-".repeat(header.chars().count());

        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{header}")?;
        for player in &snapshot.players {
            let row = self.row(player);
            writeln!(self.out, "{row}")?;
        }
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    fn finish(&mut self, result: &GameResult) -> Result<(), ReportError> {
        writeln!(self.out, "{result}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RulesConfig, Tile, TileKind};

    fn board() -> Board {
        let mut tiles: Vec<Tile> = (0..40).map(Tile::blank).collect();
        tiles[0] = Tile::go(200);
        tiles[1] = Tile::property("A", 1, 60);
        tiles[3] = Tile::new(TileKind::Jail, "Jail", 3);
        tiles[30] = Tile::new(TileKind::GoToJail, "Police", 30);
        Board::new(tiles, &RulesConfig::default()).unwrap()
    }

    fn render(snapshot: &Snapshot) -> String {
        let mut reporter = TableReporter::new(Vec::new(), &board());
        reporter.snapshot(snapshot).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_header_width() {
        assert_eq!(TableReporter::<Vec<u8>>::header().len(), 125);
    }

    #[test]
    fn test_table_layout() {
        let snapshot = Snapshot {
            players: vec![PlayerRow {
                name: "alice".into(),
                position: 6,
                bankrupt: false,
                money: 1440,
                properties: vec![1],
            }],
        };

        let text = render(&snapshot);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-".repeat(125));
        assert!(lines[1].starts_with("| NAME      | POS  | BANKRUPT | MONEY  | PROPERTIES"));
        assert!(lines[2].starts_with("| alice     | 6    | False    | 1440   | [\u{23E9}\u{1F3E0}. \u{1F3F0}"));
        assert!(lines[2].ends_with(". ] |"));
        assert_eq!(lines[3], lines[0]);
    }

    #[test]
    fn test_bankrupt_row() {
        let snapshot = Snapshot {
            players: vec![PlayerRow {
                name: "bob".into(),
                position: -1,
                bankrupt: true,
                money: 0,
                properties: vec![],
            }],
        };

        let text = render(&snapshot);
        assert!(text.contains("| bob       | -1   | True     | 0      | ["));
    }

    #[test]
    fn test_strip_has_one_cell_per_tile() {
        let reporter = TableReporter::new(Vec::new(), &board());
        let strip = reporter.strip(&[1, 5]);

        // 35 empty cells of two chars, 5 single-char cells, two brackets
        assert_eq!(strip.chars().count(), 35 * 2 + 5 + 2);
        assert!(strip.starts_with("[\u{23E9}\u{1F3E0}"));
    }

    #[test]
    fn test_finish_writes_verdict() {
        let mut reporter = TableReporter::new(Vec::new(), &board());
        reporter.finish(&GameResult::NotEnoughRolls).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "Not enough dice rolls!\n");
    }
}
