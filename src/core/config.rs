//! Rules configuration.
//!
//! `RulesConfig` carries every tunable constant of the game: board length,
//! the rent and buying-power rates, the doubles limit, and the limits the
//! input files are validated against. The defaults reproduce the standard
//! game; a JSON file can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Number of tiles on the board.
    pub board_size: usize,

    /// Rent owed on an owned property, as a percentage of its cost.
    pub rent_percent: i64,

    /// A property is bought only if its cost is strictly below this
    /// percentage of the player's money (rounded up).
    pub buying_percent: i64,

    /// Consecutive doubles that send a player to jail instead of moving.
    pub doubles_limit: u8,

    /// Minimum number of players.
    pub min_players: usize,

    /// Maximum number of players.
    pub max_players: usize,

    /// Longest accepted player name, in characters.
    pub max_name_len: usize,

    /// Lowest accepted starting money.
    pub min_money: i64,

    /// Highest accepted starting money.
    pub max_money: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: 40,
            rent_percent: 10,
            buying_percent: 90,
            doubles_limit: 3,
            min_players: 2,
            max_players: 4,
            max_name_len: 8,
            min_money: 1,
            max_money: 5000,
        }
    }
}

impl RulesConfig {
    /// Create the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse rules from a JSON object. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the rent rate.
    #[must_use]
    pub fn with_rent_percent(mut self, percent: i64) -> Self {
        self.rent_percent = percent;
        self
    }

    /// Set the buying-power rate.
    #[must_use]
    pub fn with_buying_percent(mut self, percent: i64) -> Self {
        self.buying_percent = percent;
        self
    }

    /// Set the doubles limit.
    #[must_use]
    pub fn with_doubles_limit(mut self, limit: u8) -> Self {
        self.doubles_limit = limit;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.board_size < 3 {
            return Err(SetupError::InvalidRules(format!(
                "board_size must be at least 3, got {}",
                self.board_size
            )));
        }
        if !(0..=100).contains(&self.rent_percent) {
            return Err(SetupError::InvalidRules(format!(
                "rent_percent must be within [0, 100], got {}",
                self.rent_percent
            )));
        }
        if !(0..=100).contains(&self.buying_percent) {
            return Err(SetupError::InvalidRules(format!(
                "buying_percent must be within [0, 100], got {}",
                self.buying_percent
            )));
        }
        if self.doubles_limit < 2 {
            return Err(SetupError::InvalidRules(format!(
                "doubles_limit must be at least 2, got {}",
                self.doubles_limit
            )));
        }
        if self.min_players == 0 || self.min_players > self.max_players || self.max_players > 255 {
            return Err(SetupError::InvalidRules(format!(
                "player limits [{}, {}] are not a valid range within [1, 255]",
                self.min_players, self.max_players
            )));
        }
        if self.min_money > self.max_money {
            return Err(SetupError::InvalidRules(format!(
                "money limits [{}, {}] are not a valid range",
                self.min_money, self.max_money
            )));
        }
        Ok(())
    }

    /// Purchase threshold for a player holding `money`: `ceil(money * buying%)`.
    #[must_use]
    pub fn buying_power(&self, money: i64) -> i64 {
        ceil_div(money * self.buying_percent, 100)
    }

    /// Rent a lander must be able to cover: `ceil(|cost| * rent%)`.
    #[must_use]
    pub fn rent_due(&self, cost: i64) -> i64 {
        ceil_div(cost.abs() * self.rent_percent, 100)
    }

    /// Rent actually transferred: `floor(|cost| * rent%)`.
    #[must_use]
    pub fn rent_paid(&self, cost: i64) -> i64 {
        (cost.abs() * self.rent_percent).div_euclid(100)
    }
}

/// Integer division rounding towards positive infinity.
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}
