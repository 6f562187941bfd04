//! Game event log.
//!
//! Every state change the engine makes is recorded as a `GameEvent` in the
//! `GameState` event log. The log is append-only and makes a run auditable:
//! money that leaves play (GO fees, purchases, taxes, bankruptcy) can be
//! reconciled against the starting totals from the events alone.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::roll::DiceRoll;

/// Why a player was sent to jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailCause {
    /// Landed on the GO_TO_JAIL tile.
    Tile,
    /// Rolled too many consecutive doubles.
    Doubles,
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player moved from one tile to another.
    Moved {
        player: PlayerId,
        roll: DiceRoll,
        from: usize,
        to: usize,
    },

    /// A player wrapped past GO and was charged the GO cost.
    PassedGo { player: PlayerId, fee: i64 },

    /// A player bought an unowned property.
    Purchased {
        player: PlayerId,
        tile: usize,
        cost: i64,
    },

    /// Rent moved from the lander to the owner.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        tile: usize,
        amount: i64,
    },

    /// A player was charged a TAX tile's cost.
    TaxPaid {
        player: PlayerId,
        tile: usize,
        amount: i64,
    },

    /// A player was sent to jail.
    Jailed { player: PlayerId, cause: JailCause },

    /// A jailed player sat out a turn and was released.
    Released { player: PlayerId },

    /// A player went bankrupt. `forfeited` is the money they held at the
    /// time, possibly negative.
    Bankrupt { player: PlayerId, forfeited: i64 },
}

impl GameEvent {
    /// The player this event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::Moved { player, .. }
            | GameEvent::PassedGo { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::Jailed { player, .. }
            | GameEvent::Released { player }
            | GameEvent::Bankrupt { player, .. } => player,
            GameEvent::RentPaid { payer, .. } => payer,
        }
    }

    /// Money this event removed from play, for events that pay the bank.
    ///
    /// Rent only moves money between players and contributes nothing.
    #[must_use]
    pub fn money_removed(&self) -> i64 {
        match *self {
            GameEvent::PassedGo { fee, .. } => fee,
            GameEvent::Purchased { cost, .. } => cost,
            GameEvent::TaxPaid { amount, .. } => amount,
            GameEvent::Bankrupt { forfeited, .. } => forfeited,
            _ => 0,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Moved { player, roll, from, to } => {
                write!(f, "{player} rolled {roll} and moved {from} -> {to}")
            }
            GameEvent::PassedGo { player, fee } => write!(f, "{player} passed GO ({fee})"),
            GameEvent::Purchased { player, tile, cost } => {
                write!(f, "{player} bought tile {tile} for {cost}")
            }
            GameEvent::RentPaid { payer, owner, tile, amount } => {
                write!(f, "{payer} paid {amount} rent to {owner} for tile {tile}")
            }
            GameEvent::TaxPaid { player, tile, amount } => {
                write!(f, "{player} paid {amount} tax on tile {tile}")
            }
            GameEvent::Jailed { player, cause } => write!(f, "{player} jailed ({cause:?})"),
            GameEvent::Released { player } => write!(f, "{player} released from jail"),
            GameEvent::Bankrupt { player, forfeited } => {
                write!(f, "{player} went bankrupt (forfeited {forfeited})")
            }
        }
    }
}
