//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat in the turn rotation, 0-based.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! The mutable record of one player: money, position, properties, and the
//! jailed/bankrupt flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Player identifier, also the player's seat in the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use monopoly_sim::core::{PlayerId, PlayerMap};
///
/// let mut money: PlayerMap<i64> = PlayerMap::with_value(2, 1500);
/// money[PlayerId::new(1)] -= 60;
/// assert_eq!(money[PlayerId::new(1)], 1440);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a PlayerMap from values in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow two different players' data mutably at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut requires two different players");

        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(high.index());
        let low_ref = &mut head[low.index()];
        let high_ref = &mut tail[0];

        if a < b {
            (low_ref, high_ref)
        } else {
            (high_ref, low_ref)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Validated starting record for a player: name and starting money.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub name: String,
    pub money: i64,
}

impl PlayerSeed {
    pub fn new(name: impl Into<String>, money: i64) -> Self {
        Self {
            name: name.into(),
            money,
        }
    }
}

/// Mutable state of one player.
///
/// Properties are stored as tile positions in purchase order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    money: i64,
    /// `None` once the player is out of play.
    position: Option<usize>,
    properties: SmallVec<[usize; 8]>,
    jailed: bool,
    bankrupt: bool,
}

impl Player {
    /// Create a player on GO.
    pub fn new(name: impl Into<String>, money: i64) -> Self {
        Self {
            name: name.into(),
            money,
            position: Some(0),
            properties: SmallVec::new(),
            jailed: false,
            bankrupt: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Board position, or `None` once bankrupt.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Position as shown in reports: `-1` when out of play.
    #[must_use]
    pub fn display_position(&self) -> i64 {
        self.position.map_or(-1, |p| p as i64)
    }

    pub fn set_position(&mut self, position: usize) {
        if !self.bankrupt {
            self.position = Some(position);
        }
    }

    /// Tile positions owned, in purchase order.
    #[must_use]
    pub fn properties(&self) -> &[usize] {
        &self.properties
    }

    #[must_use]
    pub fn owns(&self, position: usize) -> bool {
        self.properties.contains(&position)
    }

    #[must_use]
    pub fn is_jailed(&self) -> bool {
        self.jailed
    }

    pub fn set_jailed(&mut self, jailed: bool) {
        self.jailed = jailed;
    }

    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// Adjust money by a signed delta.
    pub fn transact(&mut self, delta: i64) {
        self.money += delta;
    }

    pub fn credit(&mut self, amount: i64) {
        self.transact(amount);
    }

    pub fn debit(&mut self, amount: i64) {
        self.transact(-amount);
    }

    /// Transfer `amount` from this player to `other`.
    pub fn pay_rent(&mut self, amount: i64, other: &mut Player) {
        self.debit(amount);
        other.credit(amount);
    }

    /// Record a purchased tile. Callers never add a tile twice.
    pub fn add_property(&mut self, position: usize) {
        debug_assert!(!self.owns(position), "tile {position} bought twice");
        self.properties.push(position);
    }

    /// Take the player out of the game.
    ///
    /// Returns the money held at the moment of bankruptcy, which may be
    /// negative.
    pub fn declare_bankrupt(&mut self) -> i64 {
        let forfeited = self.money;
        self.bankrupt = true;
        self.money = 0;
        self.properties.clear();
        self.position = None;
        forfeited
    }
}

impl From<&PlayerSeed> for Player {
    fn from(seed: &PlayerSeed) -> Self {
        Self::new(seed.name.clone(), seed.money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_map_pair_mut() {
        let mut map: PlayerMap<i64> = PlayerMap::new(4, |p| p.index() as i64);

        let (a, b) = map.pair_mut(PlayerId::new(3), PlayerId::new(1));
        assert_eq!((*a, *b), (3, 1));
        *a += 10;
        *b += 20;

        assert_eq!(map[PlayerId::new(3)], 13);
        assert_eq!(map[PlayerId::new(1)], 21);
    }

    #[test]
    #[should_panic(expected = "two different players")]
    fn test_player_map_pair_mut_same_player() {
        let mut map: PlayerMap<i64> = PlayerMap::with_value(2, 0);
        let _ = map.pair_mut(PlayerId::new(0), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i64> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_new_player_starts_on_go() {
        let player = Player::new("alice", 1500);
        assert_eq!(player.position(), Some(0));
        assert_eq!(player.money(), 1500);
        assert!(player.properties().is_empty());
        assert!(!player.is_jailed());
        assert!(!player.is_bankrupt());
    }

    #[test]
    fn test_credit_and_debit() {
        let mut player = Player::new("bob", 100);
        player.debit(30);
        assert_eq!(player.money(), 70);
        player.credit(5);
        assert_eq!(player.money(), 75);
        // Negative debit credits
        player.debit(-25);
        assert_eq!(player.money(), 100);
    }

    #[test]
    fn test_pay_rent_conserves_money() {
        let mut payer = Player::new("a", 100);
        let mut owner = Player::new("b", 50);

        payer.pay_rent(6, &mut owner);

        assert_eq!(payer.money(), 94);
        assert_eq!(owner.money(), 56);
    }

    #[test]
    fn test_declare_bankrupt() {
        let mut player = Player::new("carol", 10);
        player.add_property(1);
        player.add_property(3);
        player.debit(25);

        let forfeited = player.declare_bankrupt();

        assert_eq!(forfeited, -15);
        assert!(player.is_bankrupt());
        assert_eq!(player.money(), 0);
        assert!(player.properties().is_empty());
        assert_eq!(player.position(), None);
        assert_eq!(player.display_position(), -1);
    }

    #[test]
    fn test_bankrupt_player_stays_out_of_play() {
        let mut player = Player::new("dave", 10);
        player.declare_bankrupt();
        player.set_position(5);
        assert_eq!(player.position(), None);
    }
}
