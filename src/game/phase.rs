//! Phases of the game loop.

use serde::{Deserialize, Serialize};

use crate::rules::GameResult;

/// What the game loop does on its next step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Look at the current roll entry and player. A real roll for an
    /// active player is resolved right away; anything else moves to the
    /// matching phase.
    AwaitingRoll,

    /// The current entry is a print sentinel.
    ServicingPrint,

    /// The current player rolled doubles and may roll again.
    ExtraRollPending {
        /// Consecutive doubles resolved so far in this turn.
        doubles: u8,
        /// The look-ahead check for this doubles roll already passed, so
        /// servicing interleaved print markers does not repeat it.
        cleared: bool,
    },

    /// The current player sits out this rotation.
    Jailed,

    /// The current player is out of the game.
    Bankrupt,

    /// The game is over.
    Terminated(GameResult),
}

impl Phase {
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self, Phase::Terminated(_))
    }

    /// The result, once terminated.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match self {
            Phase::Terminated(result) => Some(result),
            _ => None,
        }
    }
}
