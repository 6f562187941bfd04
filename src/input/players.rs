//! Players file.

use super::tokenized_lines;
use crate::core::{PlayerSeed, RulesConfig};
use crate::error::SetupError;

/// Parse `<name> <money>` lines.
pub fn parse_players(text: &str, rules: &RulesConfig) -> Result<Vec<PlayerSeed>, SetupError> {
    let mut players = Vec::new();

    for (line, tokens) in tokenized_lines(text) {
        let &[name, money] = tokens.as_slice() else {
            return Err(SetupError::MalformedPlayer { line });
        };

        if name.chars().count() > rules.max_name_len {
            return Err(SetupError::NameTooLong {
                max: rules.max_name_len,
            });
        }

        let invalid_money = || SetupError::InvalidMoney {
            min: rules.min_money,
            max: rules.max_money,
        };
        let money: i64 = money.parse().map_err(|_| invalid_money())?;
        if !(rules.min_money..=rules.max_money).contains(&money) {
            return Err(invalid_money());
        }

        players.push(PlayerSeed::new(name, money));
    }

    if !(rules.min_players..=rules.max_players).contains(&players.len()) {
        return Err(SetupError::PlayerCount {
            min: rules.min_players,
            max: rules.max_players,
        });
    }

    Ok(players)
}
