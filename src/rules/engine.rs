//! Turn resolution.
//!
//! `RulesEngine` is the seam between the game loop and the rules: given a
//! player and a roll it moves the player and applies exactly one tile's
//! effect. `StandardRules` implements the standard game:
//!
//! - Wrapping past GO debits the GO tile's cost once per lap
//! - Unowned property is bought if its cost is below the buying power
//! - Owned property charges rent, bankrupting players who cannot cover it
//! - TAX debits the tile cost, GO_TO_JAIL jails the player
//! - Negative money after the effect is bankruptcy

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    Board, DiceRoll, GameEvent, GameState, JailCause, PlayerId, RulesConfig, TileKind,
};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every other player went bankrupt.
    Winner { player: PlayerId, name: String },
    /// The roll script ran out before anyone won.
    NotEnoughRolls,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner { name, .. } => write!(f, "{name} won!"),
            GameResult::NotEnoughRolls => f.write_str("Not enough dice rolls!"),
        }
    }
}

/// How a resolved roll left the player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The turn may continue (an extra roll is granted on doubles).
    Continues,
    /// The player was sent to jail; the turn is over.
    Jailed,
    /// The player went bankrupt; the turn is over.
    Bankrupt,
}

impl TurnOutcome {
    #[must_use]
    pub const fn continues(self) -> bool {
        matches!(self, TurnOutcome::Continues)
    }
}

/// Rules engine trait.
///
/// The game loop calls `resolve_turn` once per real roll and never
/// interprets tile effects itself.
///
/// ## Implementation Notes
///
/// - Must be deterministic: the same state and roll give the same result
/// - Must record every state change in `state.events`
/// - Should ignore players that are out of play
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Move `player` by `roll` and apply the landing tile's effect.
    fn resolve_turn(
        &self,
        state: &mut GameState,
        board: &Board,
        player: PlayerId,
        roll: DiceRoll,
    ) -> TurnOutcome;
}

/// The standard rules.
#[derive(Clone, Debug, Default)]
pub struct StandardRules {
    config: RulesConfig,
}

impl StandardRules {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Land on a property: buy it, pay rent, or nothing if already ours.
    fn land_on_property(
        &self,
        state: &mut GameState,
        board: &Board,
        player: PlayerId,
        position: usize,
    ) -> TurnOutcome {
        let tile = board.tile(position);

        match state.owner_of(position) {
            None => {
                let money = state.player(player).money();
                if tile.cost.abs() < self.config.buying_power(money) {
                    debug!(%player, tile = %tile.name, cost = tile.cost, "property purchased");
                    state.purchase(player, tile);
                } else {
                    debug!(%player, tile = %tile.name, cost = tile.cost, money, "property too expensive");
                }
            }
            Some(owner) if owner == player => {}
            Some(owner) => {
                let money = state.player(player).money();
                if self.config.rent_due(tile.cost) > money {
                    info!(%player, %owner, tile = %tile.name, money, "cannot cover rent");
                    state.declare_bankrupt(player);
                    return TurnOutcome::Bankrupt;
                }
                let rent = self.config.rent_paid(tile.cost);
                debug!(%player, %owner, tile = %tile.name, rent, "rent paid");
                state.pay_rent(player, owner, position, rent);
            }
        }

        TurnOutcome::Continues
    }
}

impl RulesEngine for StandardRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn resolve_turn(
        &self,
        state: &mut GameState,
        board: &Board,
        player: PlayerId,
        roll: DiceRoll,
    ) -> TurnOutcome {
        let Some(from) = state.player(player).position() else {
            return TurnOutcome::Bankrupt;
        };

        // Wrap past GO, charging once per lap
        let mut target = from + roll.total();
        while target >= board.len() {
            target -= board.len();
            state.charge_go_fee(player, board.go().cost);
        }

        state.player_mut(player).set_position(target);
        state.record(GameEvent::Moved {
            player,
            roll,
            from,
            to: target,
        });
        debug!(%player, %roll, from, to = target, "moved");

        let tile = board.tile(target);
        match tile.kind {
            TileKind::Property => {
                if self.land_on_property(state, board, player, target) == TurnOutcome::Bankrupt {
                    return TurnOutcome::Bankrupt;
                }
            }
            TileKind::Tax => {
                debug!(%player, tile = %tile.name, amount = tile.cost, "tax paid");
                state.pay_tax(player, tile);
            }
            TileKind::GoToJail => {
                debug!(%player, "sent to jail");
                state.send_to_jail(player, board.jail(), JailCause::Tile);
                return TurnOutcome::Jailed;
            }
            TileKind::Go | TileKind::Jail | TileKind::Blank => {}
        }

        if state.player(player).money() < 0 {
            info!(%player, money = state.player(player).money(), "bankrupt");
            state.declare_bankrupt(player);
            return TurnOutcome::Bankrupt;
        }

        TurnOutcome::Continues
    }
}
