//! Game state: players, property ownership, and the event log.
//!
//! ## Ownership
//!
//! Each player keeps the positions they own, and `GameState` keeps an owner
//! index from tile position to `PlayerId`. Both are only changed through the
//! methods here, so they always agree with `Tile::find_owner`.
//!
//! ## Event log
//!
//! `events` is an `im::Vector`, so cloning a `GameState` is O(1) regardless
//! of how long the game has run.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{GameEvent, JailCause};
use super::player::{Player, PlayerId, PlayerMap, PlayerSeed};
use super::tile::Tile;

/// Complete mutable state of a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Owner of each owned tile, keyed by position.
    owners: FxHashMap<usize, PlayerId>,

    /// Everything that has happened, in order.
    pub events: Vector<GameEvent>,
}

impl GameState {
    /// Create the starting state: every player on GO with their seed money.
    #[must_use]
    pub fn new(seeds: &[PlayerSeed]) -> Self {
        Self {
            players: PlayerMap::from_vec(seeds.iter().map(Player::from).collect()),
            owners: FxHashMap::default(),
            events: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable access to a player's position and flags.
    ///
    /// Property changes must go through `purchase` and `declare_bankrupt`
    /// to keep the owner index consistent.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Players that are not bankrupt.
    pub fn solvent_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_bankrupt())
            .map(|(id, _)| id)
    }

    /// Number of bankrupt players.
    #[must_use]
    pub fn bankrupt_count(&self) -> usize {
        self.players.values().filter(|p| p.is_bankrupt()).count()
    }

    /// Total money held by all players.
    #[must_use]
    pub fn total_money(&self) -> i64 {
        self.players.values().map(Player::money).sum()
    }

    /// Owner of the tile at `position`, from the owner index.
    #[must_use]
    pub fn owner_of(&self, position: usize) -> Option<PlayerId> {
        self.owners.get(&position).copied()
    }

    /// Record an event.
    pub fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Charge a player the GO tile's cost for wrapping past it.
    pub fn charge_go_fee(&mut self, player: PlayerId, fee: i64) {
        self.players[player].debit(fee);
        self.record(GameEvent::PassedGo { player, fee });
    }

    /// Buy an unowned tile: debit its signed cost and take ownership.
    pub fn purchase(&mut self, player: PlayerId, tile: &Tile) {
        debug_assert!(self.owner_of(tile.position).is_none(), "tile already owned");

        let buyer = &mut self.players[player];
        buyer.debit(tile.cost);
        buyer.add_property(tile.position);
        self.owners.insert(tile.position, player);
        self.record(GameEvent::Purchased {
            player,
            tile: tile.position,
            cost: tile.cost,
        });
    }

    /// Move `amount` from `payer` to `owner`. A player never pays themself.
    pub fn pay_rent(&mut self, payer: PlayerId, owner: PlayerId, tile: usize, amount: i64) {
        if payer == owner {
            return;
        }
        let (from, to) = self.players.pair_mut(payer, owner);
        from.pay_rent(amount, to);
        self.record(GameEvent::RentPaid {
            payer,
            owner,
            tile,
            amount,
        });
    }

    /// Charge a TAX tile's signed cost.
    pub fn pay_tax(&mut self, player: PlayerId, tile: &Tile) {
        self.players[player].debit(tile.cost);
        self.record(GameEvent::TaxPaid {
            player,
            tile: tile.position,
            amount: tile.cost,
        });
    }

    /// Put a player in jail.
    pub fn send_to_jail(&mut self, player: PlayerId, jail: usize, cause: JailCause) {
        let p = &mut self.players[player];
        p.set_position(jail);
        p.set_jailed(true);
        self.record(GameEvent::Jailed { player, cause });
    }

    /// Let a jailed player out after sitting out a turn.
    pub fn release_from_jail(&mut self, player: PlayerId) {
        self.players[player].set_jailed(false);
        self.record(GameEvent::Released { player });
    }

    /// Bankrupt a player, returning their properties to the bank.
    pub fn declare_bankrupt(&mut self, player: PlayerId) {
        if self.players[player].is_bankrupt() {
            return;
        }
        let forfeited = self.players[player].declare_bankrupt();
        self.owners.retain(|_, owner| *owner != player);
        self.record(GameEvent::Bankrupt { player, forfeited });
    }
}
