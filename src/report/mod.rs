//! Status reporting.
//!
//! The game loop hands every status snapshot and the final verdict to a
//! `StatusSink`. Sinks never see the live `GameState`, only a `Snapshot`
//! captured from it, so reporting cannot change the game.
//!
//! ## Sinks
//!
//! - `TableReporter`: the fixed-width console table
//! - `JsonLinesReporter`: one JSON object per line
//! - `Recorder`: keeps everything in memory

mod json;
mod table;

pub use json::JsonLinesReporter;
pub use table::TableReporter;

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::error::ReportError;
use crate::rules::GameResult;

/// One player's line in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub name: String,
    /// Board position, `-1` once out of play.
    pub position: i64,
    pub bankrupt: bool,
    pub money: i64,
    /// Owned tile positions in purchase order.
    pub properties: Vec<usize>,
}

/// The state of every player at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerRow>,
}

impl Snapshot {
    /// Capture the players of `state`.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let players = state
            .players()
            .values()
            .map(|p| PlayerRow {
                name: p.name().to_string(),
                position: p.display_position(),
                bankrupt: p.is_bankrupt(),
                money: p.money(),
                properties: p.properties().to_vec(),
            })
            .collect();

        Self { players }
    }
}

/// Receiver of status snapshots and the final verdict.
pub trait StatusSink {
    /// Report a snapshot.
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError>;

    /// Report the end of the game. Called once, after the final snapshot.
    fn finish(&mut self, result: &GameResult) -> Result<(), ReportError>;
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        (**self).snapshot(snapshot)
    }

    fn finish(&mut self, result: &GameResult) -> Result<(), ReportError> {
        (**self).finish(result)
    }
}

/// In-memory sink.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub snapshots: Vec<Snapshot>,
    pub result: Option<GameResult>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusSink for Recorder {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn finish(&mut self, result: &GameResult) -> Result<(), ReportError> {
        self.result = Some(result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, PlayerSeed, Tile};

    #[test]
    fn test_capture() {
        let mut state = GameState::new(&[PlayerSeed::new("a", 1500), PlayerSeed::new("b", 20)]);
        state.purchase(PlayerId::new(0), &Tile::property("A", 1, 60));
        state.declare_bankrupt(PlayerId::new(1));

        let snapshot = Snapshot::capture(&state);

        assert_eq!(
            snapshot.players,
            vec![
                PlayerRow {
                    name: "a".into(),
                    position: 0,
                    bankrupt: false,
                    money: 1440,
                    properties: vec![1],
                },
                PlayerRow {
                    name: "b".into(),
                    position: -1,
                    bankrupt: true,
                    money: 0,
                    properties: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_capture_does_not_touch_state() {
        let state = GameState::new(&[PlayerSeed::new("a", 1500), PlayerSeed::new("b", 1500)]);
        let before = state.clone();

        let first = Snapshot::capture(&state);
        let second = Snapshot::capture(&state);

        assert_eq!(first, second);
        assert_eq!(state.players(), before.players());
        assert_eq!(state.events, before.events);
    }

    #[test]
    fn test_recorder() {
        let state = GameState::new(&[PlayerSeed::new("a", 1), PlayerSeed::new("b", 2)]);
        let mut recorder = Recorder::new();

        recorder.snapshot(&Snapshot::capture(&state)).unwrap();
        recorder.finish(&GameResult::NotEnoughRolls).unwrap();

        assert_eq!(recorder.snapshots.len(), 1);
        assert_eq!(recorder.result, Some(GameResult::NotEnoughRolls));
    }
}
