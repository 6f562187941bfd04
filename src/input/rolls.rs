//! Rolls file.
//!
//! Every non-blank line must be `PRINT` or exactly two dice. Lines with
//! three or more tokens are rejected as `Invalid dice roll command`
//! rather than skipped, so a typo cannot silently shorten the script.

use super::tokenized_lines;
use crate::core::{DiceRoll, RollEntry, RollScript};
use crate::error::SetupError;

const PRINT: &str = "PRINT";

/// Parse `PRINT` and `<d1> <d2>` lines into a roll script.
pub fn parse_rolls(text: &str) -> Result<RollScript, SetupError> {
    let mut entries = Vec::new();

    for (_, tokens) in tokenized_lines(text) {
        let entry = match tokens.as_slice() {
            &[PRINT] => RollEntry::Print,
            &[command] => return Err(SetupError::InvalidRollCommand(command.to_string())),
            &[first, second] => RollEntry::Dice(DiceRoll::new(die(first)?, die(second)?)?),
            _ => return Err(SetupError::InvalidRollCommand(tokens.join(" "))),
        };
        entries.push(entry);
    }

    RollScript::new(entries)
}

fn die(token: &str) -> Result<u8, SetupError> {
    token
        .parse()
        .map_err(|_| SetupError::InvalidRollValue(token.to_string()))
}
