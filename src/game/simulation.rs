//! The game loop.
//!
//! `Simulation` walks a roll cursor over the script and a rotation counter
//! over the players. Each call to `step` performs one transition of the
//! `Phase` state machine:
//!
//! ```text
//! AwaitingRoll ──jailed──────────▶ Jailed ──────────┐
//!      │ ──print sentinel───────▶ ServicingPrint ───┤
//!      │ ──bankrupt─────────────▶ Bankrupt ─────────┤
//!      │ ──doubles, continues───▶ ExtraRollPending ─┤
//!      └──otherwise: end turn ──────────────────────┴─▶ AwaitingRoll | Terminated
//! ```
//!
//! Only real rolls and print sentinels consume entries. Jailed and
//! bankrupt players use up a rotation slot without consuming a roll, and a
//! print sentinel leaves the rotation where it is.

use tracing::{debug, info, trace};

use super::phase::Phase;
use crate::core::{Board, GameState, JailCause, PlayerId, PlayerSeed, RollEntry, RollScript, RulesConfig};
use crate::error::ReportError;
use crate::report::{Snapshot, StatusSink};
use crate::rules::{GameResult, RulesEngine, StandardRules};

/// Entries that must remain after a doubles roll for an extra roll to be
/// taken. With fewer, the extra roll is abandoned and the turn ends.
pub const CHAIN_LOOKAHEAD: usize = 3;

/// A game driven by a roll script.
pub struct Simulation<R: RulesEngine = StandardRules> {
    rules: R,
    board: Board,
    rolls: RollScript,
    state: GameState,
    /// Index of the current roll entry.
    cursor: usize,
    /// Turns taken so far; the current player is `rotation % player_count`.
    rotation: usize,
    phase: Phase,
}

impl Simulation<StandardRules> {
    /// Create a game with the standard rules.
    pub fn new(players: &[PlayerSeed], board: Board, rolls: RollScript, config: RulesConfig) -> Self {
        Self::with_rules(StandardRules::new(config), players, board, rolls)
    }
}

impl<R: RulesEngine> Simulation<R> {
    /// Create a game with custom rules.
    pub fn with_rules(rules: R, players: &[PlayerSeed], board: Board, rolls: RollScript) -> Self {
        Self {
            rules,
            board,
            rolls,
            state: GameState::new(players),
            cursor: 0,
            rotation: 0,
            phase: Phase::AwaitingRoll,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Index of the current roll entry.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new((self.rotation % self.state.player_count()) as u8)
    }

    /// Run until the game ends.
    pub fn run<S: StatusSink>(&mut self, sink: &mut S) -> Result<GameResult, ReportError> {
        loop {
            if let Some(result) = self.step(sink)?.result() {
                return Ok(result.clone());
            }
        }
    }

    /// Perform one transition.
    pub fn step<S: StatusSink>(&mut self, sink: &mut S) -> Result<&Phase, ReportError> {
        let next = match self.phase.clone() {
            Phase::Terminated(result) => Phase::Terminated(result),
            Phase::AwaitingRoll => self.await_roll(sink)?,
            Phase::ServicingPrint => {
                self.emit_snapshot(sink)?;
                self.cursor += 1;
                self.after_advance(sink)?
            }
            Phase::Jailed => {
                let player = self.current_player();
                debug!(%player, "sits out a turn in jail");
                self.state.release_from_jail(player);
                self.rotation += 1;
                self.after_advance(sink)?
            }
            Phase::Bankrupt => {
                self.rotation += 1;
                self.after_advance(sink)?
            }
            Phase::ExtraRollPending { doubles, cleared } => self.extra_roll(doubles, cleared, sink)?,
        };

        trace!(cursor = self.cursor, rotation = self.rotation, phase = ?next, "step");
        self.phase = next;
        Ok(&self.phase)
    }

    fn await_roll<S: StatusSink>(&mut self, sink: &mut S) -> Result<Phase, ReportError> {
        let Some(entry) = self.rolls.get(self.cursor) else {
            return self.terminate(GameResult::NotEnoughRolls, sink);
        };

        let player = self.current_player();
        let (jailed, bankrupt) = {
            let p = self.state.player(player);
            (p.is_jailed(), p.is_bankrupt())
        };

        if jailed {
            return Ok(Phase::Jailed);
        }

        match entry {
            RollEntry::Print => Ok(Phase::ServicingPrint),
            RollEntry::Dice(_) if bankrupt => Ok(Phase::Bankrupt),
            RollEntry::Dice(roll) => {
                let outcome = self.rules.resolve_turn(&mut self.state, &self.board, player, roll);
                if outcome.continues() && roll.is_doubles() {
                    Ok(Phase::ExtraRollPending {
                        doubles: 1,
                        cleared: false,
                    })
                } else {
                    self.end_turn(sink)
                }
            }
        }
    }

    /// Continue a doubles chain: service print markers one at a time, then
    /// take the next real roll.
    fn extra_roll<S: StatusSink>(
        &mut self,
        doubles: u8,
        cleared: bool,
        sink: &mut S,
    ) -> Result<Phase, ReportError> {
        let player = self.current_player();

        if !cleared && self.cursor + CHAIN_LOOKAHEAD >= self.rolls.len() {
            debug!(%player, cursor = self.cursor, "extra roll abandoned, script too short");
            return self.end_turn(sink);
        }

        match self.rolls.get(self.cursor + 1) {
            None => self.end_turn(sink),
            Some(RollEntry::Print) => {
                if let Some(result) = self.winner() {
                    return self.terminate(result, sink);
                }
                self.cursor += 1;
                self.emit_snapshot(sink)?;
                Ok(Phase::ExtraRollPending {
                    doubles,
                    cleared: true,
                })
            }
            Some(RollEntry::Dice(roll)) => {
                self.cursor += 1;

                if roll.is_doubles() && doubles + 1 >= self.rules.config().doubles_limit {
                    info!(%player, doubles = doubles + 1, "too many doubles, sent to jail");
                    self.state.send_to_jail(player, self.board.jail(), JailCause::Doubles);
                    return self.end_turn(sink);
                }

                let outcome = self.rules.resolve_turn(&mut self.state, &self.board, player, roll);
                if outcome.continues() && roll.is_doubles() {
                    Ok(Phase::ExtraRollPending {
                        doubles: doubles + 1,
                        cleared: false,
                    })
                } else {
                    self.end_turn(sink)
                }
            }
        }
    }

    /// Hand the turn to the next player and consume the current entry.
    fn end_turn<S: StatusSink>(&mut self, sink: &mut S) -> Result<Phase, ReportError> {
        self.rotation += 1;
        self.cursor += 1;
        self.after_advance(sink)
    }

    fn after_advance<S: StatusSink>(&mut self, sink: &mut S) -> Result<Phase, ReportError> {
        match self.termination() {
            Some(result) => self.terminate(result, sink),
            None => Ok(Phase::AwaitingRoll),
        }
    }

    /// The sole player left standing, if there is one.
    fn winner(&self) -> Option<GameResult> {
        let mut solvent = self.state.solvent_players();
        match (solvent.next(), solvent.next()) {
            (Some(player), None) => Some(GameResult::Winner {
                player,
                name: self.state.player(player).name().to_string(),
            }),
            _ => None,
        }
    }

    fn termination(&self) -> Option<GameResult> {
        self.winner()
            .or_else(|| (self.cursor >= self.rolls.len()).then_some(GameResult::NotEnoughRolls))
    }

    fn terminate<S: StatusSink>(&mut self, result: GameResult, sink: &mut S) -> Result<Phase, ReportError> {
        info!(%result, cursor = self.cursor, "game over");
        self.emit_snapshot(sink)?;
        sink.finish(&result)?;
        Ok(Phase::Terminated(result))
    }

    fn emit_snapshot<S: StatusSink>(&self, sink: &mut S) -> Result<(), ReportError> {
        sink.snapshot(&Snapshot::capture(&self.state))
    }
}
