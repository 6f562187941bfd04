//! Dice rolls and the roll script.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Faces on a die.
pub const DIE_FACES: u8 = 6;

/// A pair of dice values, each in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll(u8, u8);

impl DiceRoll {
    /// Create a roll, rejecting values outside `1..=6`.
    pub fn new(first: u8, second: u8) -> Result<Self, SetupError> {
        for die in [first, second] {
            if !(1..=DIE_FACES).contains(&die) {
                return Err(SetupError::InvalidRollValue(die.to_string()));
            }
        }
        Ok(Self(first, second))
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn total(self) -> usize {
        self.0 as usize + self.1 as usize
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.0 == self.1
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// One entry of the roll script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollEntry {
    /// Request a status snapshot.
    Print,
    /// A real roll for the current player.
    Dice(DiceRoll),
}

impl RollEntry {
    #[must_use]
    pub const fn is_print(self) -> bool {
        matches!(self, RollEntry::Print)
    }
}

/// A validated roll sequence that starts and ends with `Print`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollScript {
    entries: Vec<RollEntry>,
}

impl RollScript {
    pub fn new(entries: Vec<RollEntry>) -> Result<Self, SetupError> {
        let bookended = matches!(
            (entries.first(), entries.last()),
            (Some(first), Some(last)) if first.is_print() && last.is_print()
        );
        if !bookended {
            return Err(SetupError::PrintBookends);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<RollEntry> {
        self.entries.get(index).copied()
    }

    #[must_use]
    pub fn entries(&self) -> &[RollEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_roll() {
        let roll = DiceRoll::new(3, 3).unwrap();
        assert_eq!(roll.total(), 6);
        assert!(roll.is_doubles());
        assert_eq!(roll.to_string(), "3+3");
        assert!(!RollEntry::Dice(roll).is_print());
        assert!(RollEntry::Print.is_print());

        let roll = DiceRoll::new(1, 6).unwrap();
        assert_eq!(roll.total(), 7);
        assert!(!roll.is_doubles());
    }

    #[test]
    fn test_dice_out_of_range() {
        assert_eq!(
            DiceRoll::new(0, 3).unwrap_err().to_string(),
            "Invalid dice roll value: 0"
        );
        assert_eq!(
            DiceRoll::new(2, 7).unwrap_err().to_string(),
            "Invalid dice roll value: 7"
        );
    }

    #[test]
    fn test_script_bookends() {
        let roll = RollEntry::Dice(DiceRoll::new(1, 2).unwrap());

        assert!(RollScript::new(vec![RollEntry::Print, roll, RollEntry::Print]).is_ok());
        // A single PRINT is both first and last
        assert!(RollScript::new(vec![RollEntry::Print]).is_ok());

        assert!(matches!(
            RollScript::new(vec![roll, RollEntry::Print]),
            Err(SetupError::PrintBookends)
        ));
        assert!(matches!(
            RollScript::new(vec![RollEntry::Print, roll]),
            Err(SetupError::PrintBookends)
        ));
        assert!(matches!(RollScript::new(vec![]), Err(SetupError::PrintBookends)));
    }
}
