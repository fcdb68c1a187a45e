//! The table coordinator: players, seating, blinds, pot, and rounds.

use std::collections::{BTreeSet, HashMap};

use crate::game::entities::{Blinds, Chips, Player, Round, UNSEATED, Username};
use crate::game::errors::{TableError, TableResult};
use crate::game::log::{Activity, BlindKind, LogEntry};

use super::snapshot::TableSnapshot;

/// The authoritative in-memory model of one table: its players, seating
/// order, pot, betting round, dealer rotation, and activity log.
///
/// Every mutation validates its preconditions, applies atomically (a
/// rejected operation changes nothing), and appends an activity entry.
/// Methods are synchronous and assume a single-writer discipline; callers
/// that share a table across threads must serialize mutations themselves.
///
/// The coordinator tracks chips and sequencing only. It deals no cards and
/// picks no winners; a human decides who wins and calls
/// [`distribute_pot`](Table::distribute_pot) accordingly. Turn order is not
/// enforced, so any seated player may act at any time.
#[derive(Debug)]
pub struct Table {
    players: HashMap<Username, Player>,
    /// Always a permutation of `players`' keys; defines dealer/blind
    /// rotation.
    seating_order: Vec<Username>,
    active: bool,
    pot: Chips,
    current_round: Round,
    blinds: Blinds,
    dealer_index: usize,
    /// Per-hand activity log, cleared at each `start_hand`.
    activity_log: Vec<LogEntry>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            seating_order: Vec::new(),
            active: false,
            pot: 0,
            current_round: Round::Preflop,
            blinds: Blinds::default(),
            dealer_index: 0,
            activity_log: Vec::new(),
        }
    }

    /// Rebuild a coordinator from a persisted snapshot at process startup.
    ///
    /// Fails with [`TableError::NotAPermutation`] if the snapshot's seating
    /// order and player set disagree. Seat positions are re-derived from
    /// the seating order, and the dealer index is wrapped into range.
    pub fn restore(snapshot: TableSnapshot) -> TableResult<Self> {
        let seated: BTreeSet<_> = snapshot.seating_order.iter().collect();
        let named: BTreeSet<_> = snapshot.players.iter().map(|p| &p.name).collect();
        if seated != named || snapshot.seating_order.len() != snapshot.players.len() {
            return Err(TableError::NotAPermutation);
        }

        let players = snapshot
            .players
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        let dealer_index = if snapshot.seating_order.is_empty() {
            0
        } else {
            snapshot.dealer_index % snapshot.seating_order.len()
        };
        let mut table = Self {
            players,
            seating_order: snapshot.seating_order,
            active: snapshot.active,
            pot: snapshot.pot,
            current_round: snapshot.current_round,
            blinds: Blinds {
                small: snapshot.small_blind,
                big: snapshot.big_blind,
            },
            dealer_index,
            activity_log: snapshot.activity_log,
        };
        table.renumber_seats();
        Ok(table)
    }

    /// Seat a player at the end of the seating order. A hand does not have
    /// to be inactive for this; late arrivals simply sit out until the next
    /// hand starts.
    pub fn add_player(&mut self, mut player: Player) -> TableResult<()> {
        if self.players.contains_key(&player.name) {
            return Err(TableError::AlreadySeated);
        }
        let message = format!("Player {} joined the game", player.name);
        self.seating_order.push(player.name.clone());
        player.seat_position = (self.seating_order.len() - 1) as i32;
        player.is_active = true;
        self.players.insert(player.name.clone(), player);
        self.log(Activity::System { message });
        Ok(())
    }

    /// Remove a player from the table, renumbering the remaining seats
    /// stably with no gaps. Returns the removed player so the caller can
    /// write its final state back to a durable registry.
    pub fn remove_player(&mut self, name: &Username) -> TableResult<Player> {
        let mut player = self
            .players
            .remove(name)
            .ok_or(TableError::UnknownPlayer)?;
        self.seating_order.retain(|n| n != name);
        player.seat_position = UNSEATED;
        player.is_active = false;
        self.log(Activity::System {
            message: format!("Player {name} left the game"),
        });
        self.renumber_seats();
        Ok(player)
    }

    /// Replace the seating order with `new_order`, which must be exactly a
    /// permutation of the current order (same names, any arrangement).
    pub fn reorder_players(&mut self, new_order: &[Username]) -> TableResult<()> {
        let current: BTreeSet<_> = self.seating_order.iter().collect();
        let proposed: BTreeSet<_> = new_order.iter().collect();
        if current != proposed || new_order.len() != self.seating_order.len() {
            return Err(TableError::NotAPermutation);
        }
        self.seating_order = new_order.to_vec();
        self.renumber_seats();
        Ok(())
    }

    /// Begin a new hand: reset the pot and round, clear the per-hand log,
    /// reset every player's hand state, and post blinds.
    pub fn start_hand(&mut self, blinds: Blinds) -> TableResult<()> {
        if self.players.len() < 2 {
            return Err(TableError::NotEnoughPlayers);
        }

        self.active = true;
        self.pot = 0;
        self.current_round = Round::Preflop;
        self.blinds = blinds;
        self.activity_log.clear();

        for player in self.players.values_mut() {
            player.start_new_hand();
        }

        self.log(Activity::GameStart);
        self.post_blinds()
    }

    /// Post the small and big blinds relative to the dealer seat.
    ///
    /// Both blind seats are computed mod the current seating-order length,
    /// so with exactly 2 players a blind seat can coincide with the dealer
    /// seat in wraparound. A blind is skipped entirely when that player's
    /// stack is below the blind amount; otherwise the posted amount is
    /// `min(blind, chips)`.
    pub fn post_blinds(&mut self) -> TableResult<()> {
        let seats = self.seating_order.len();
        if seats < 2 {
            return Err(TableError::NotEnoughPlayers);
        }

        let sb_name = self.seating_order[(self.dealer_index + 1) % seats].clone();
        let bb_name = self.seating_order[(self.dealer_index + 2) % seats].clone();
        let blinds = [
            (sb_name, self.blinds.small, BlindKind::Small),
            (bb_name, self.blinds.big, BlindKind::Big),
        ];

        for (name, blind, kind) in blinds {
            let posted = match self.players.get_mut(&name) {
                Some(player) if player.chips >= blind => {
                    let amount = blind.min(player.chips);
                    player.place_bet(amount);
                    Some(amount)
                }
                _ => None,
            };
            if let Some(amount) = posted {
                self.pot += amount;
                self.log(Activity::Blinds {
                    username: name,
                    amount,
                    blind: kind,
                });
            }
        }

        Ok(())
    }

    /// Move chips from a player's stack into the pot.
    pub fn place_bet(&mut self, name: &Username, amount: Chips) -> TableResult<()> {
        if !self.active {
            return Err(TableError::HandNotActive);
        }
        let player = self.players.get_mut(name).ok_or(TableError::UnknownPlayer)?;
        if player.folded {
            return Err(TableError::PlayerFolded);
        }
        if amount == 0 {
            return Err(TableError::InvalidAmount(amount));
        }
        if amount > player.chips {
            return Err(TableError::InsufficientChips {
                available: player.chips,
                required: amount,
            });
        }

        player.place_bet(amount);
        self.pot += amount;
        self.log(Activity::Bet {
            username: name.clone(),
            amount,
            round: self.current_round,
            pot: self.pot,
        });
        Ok(())
    }

    /// Fold a player's hand.
    pub fn fold_player(&mut self, name: &Username) -> TableResult<()> {
        if !self.active {
            return Err(TableError::HandNotActive);
        }
        let player = self.players.get_mut(name).ok_or(TableError::UnknownPlayer)?;
        player.fold();
        self.log(Activity::Fold {
            username: name.clone(),
            folded: true,
        });
        Ok(())
    }

    /// Return a folded player to the hand.
    pub fn unfold_player(&mut self, name: &Username) -> TableResult<()> {
        if !self.active {
            return Err(TableError::HandNotActive);
        }
        let player = self.players.get_mut(name).ok_or(TableError::UnknownPlayer)?;
        player.unfold();
        self.log(Activity::Fold {
            username: name.clone(),
            folded: false,
        });
        Ok(())
    }

    /// Advance to the next betting round, zeroing every player's current
    /// bet. Fails once the river is reached.
    pub fn next_round(&mut self) -> TableResult<Round> {
        let next = self.current_round.next().ok_or(TableError::AtFinalRound)?;
        self.current_round = next;

        for player in self.players.values_mut() {
            player.reset_current_bet();
        }

        self.log(Activity::RoundChange { round: next });
        Ok(next)
    }

    /// Pay part (or all) of the pot out to a player. May be called several
    /// times to split a pot among several winners; the pot is not required
    /// to reach exactly zero.
    pub fn distribute_pot(&mut self, name: &Username, amount: Chips) -> TableResult<()> {
        if !self.active {
            return Err(TableError::HandNotActive);
        }
        let player = self.players.get_mut(name).ok_or(TableError::UnknownPlayer)?;
        if amount == 0 || amount > self.pot {
            return Err(TableError::InvalidAmount(amount));
        }

        player.collect_winnings(amount);
        self.pot -= amount;
        self.log(Activity::Distribution {
            username: name.clone(),
            amount,
            remaining: self.pot,
        });
        Ok(())
    }

    /// End the current hand and advance the dealer seat. Chip stacks and
    /// lifetime stats are untouched; per-hand fields are cleared by the
    /// next `start_hand`.
    pub fn end_hand(&mut self) -> TableResult<()> {
        if !self.active {
            return Err(TableError::HandNotActive);
        }

        self.active = false;
        self.log(Activity::GameEnd { pot: self.pot });

        // Guard against mod-by-zero when everyone already left.
        if !self.seating_order.is_empty() {
            self.dealer_index = (self.dealer_index + 1) % self.seating_order.len();
        }
        Ok(())
    }

    /// Administrative stack correction, delegated to the player entity
    /// (clamped at a zero stack). Emits no activity entry; external layers
    /// record corrections through their own events. Returns the delta
    /// actually applied.
    pub fn adjust_chips(&mut self, name: &Username, delta: i64) -> TableResult<i64> {
        let player = self.players.get_mut(name).ok_or(TableError::UnknownPlayer)?;
        Ok(player.adjust_chips(delta))
    }

    /// A consistent full-state view, suitable for broadcast or persistence.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            players: self
                .seating_order
                .iter()
                .filter_map(|name| self.players.get(name))
                .cloned()
                .collect(),
            seating_order: self.seating_order.clone(),
            active: self.active,
            pot: self.pot,
            activity_log: self.activity_log.clone(),
            current_round: self.current_round,
            round_name: self.current_round.display_name().to_string(),
            small_blind: self.blinds.small,
            big_blind: self.blinds.big,
            dealer_index: self.dealer_index,
        }
    }

    #[must_use]
    pub fn player(&self, name: &Username) -> Option<&Player> {
        self.players.get(name)
    }

    #[must_use]
    pub fn seating_order(&self) -> &[Username] {
        &self.seating_order
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn pot(&self) -> Chips {
        self.pot
    }

    #[must_use]
    pub fn current_round(&self) -> Round {
        self.current_round
    }

    #[must_use]
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    #[must_use]
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    #[must_use]
    pub fn activity_log(&self) -> &[LogEntry] {
        &self.activity_log
    }

    fn log(&mut self, activity: Activity) {
        self.activity_log.push(LogEntry::now(activity));
    }

    /// Re-derive every player's seat position from its index in the
    /// seating order.
    fn renumber_seats(&mut self) {
        for (i, name) in self.seating_order.iter().enumerate() {
            if let Some(player) = self.players.get_mut(name) {
                player.seat_position = i as i32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::log::Activity;

    fn table_with(names: &[&str]) -> Table {
        let mut table = Table::new();
        for name in names {
            table
                .add_player(Player::new(Username::new(name), 1000))
                .unwrap();
        }
        table
    }

    fn name(s: &str) -> Username {
        Username::new(s)
    }

    #[test]
    fn test_add_player_assigns_last_seat() {
        let table = table_with(&["alice", "bob"]);
        assert_eq!(table.player(&name("alice")).unwrap().seat_position, 0);
        assert_eq!(table.player(&name("bob")).unwrap().seat_position, 1);
        assert!(table.player(&name("bob")).unwrap().is_active);
    }

    #[test]
    fn test_add_player_rejects_duplicate_name() {
        let mut table = table_with(&["alice"]);
        let log_len = table.activity_log().len();
        let err = table
            .add_player(Player::new(name("alice"), 500))
            .unwrap_err();
        assert_eq!(err, TableError::AlreadySeated);
        // No log entry for the rejected add.
        assert_eq!(table.activity_log().len(), log_len);
    }

    #[test]
    fn test_remove_player_renumbers_without_gaps() {
        let mut table = table_with(&["alice", "bob", "carol"]);
        let removed = table.remove_player(&name("bob")).unwrap();
        assert_eq!(removed.seat_position, UNSEATED);
        assert!(!removed.is_active);
        assert_eq!(table.seating_order(), &[name("alice"), name("carol")]);
        assert_eq!(table.player(&name("alice")).unwrap().seat_position, 0);
        assert_eq!(table.player(&name("carol")).unwrap().seat_position, 1);
    }

    #[test]
    fn test_remove_unknown_player_fails() {
        let mut table = table_with(&["alice"]);
        assert_eq!(
            table.remove_player(&name("bob")).unwrap_err(),
            TableError::UnknownPlayer
        );
    }

    #[test]
    fn test_reorder_players_accepts_permutation() {
        let mut table = table_with(&["alice", "bob", "carol"]);
        let new_order = vec![name("carol"), name("alice"), name("bob")];
        table.reorder_players(&new_order).unwrap();
        assert_eq!(table.seating_order(), new_order.as_slice());
        assert_eq!(table.player(&name("carol")).unwrap().seat_position, 0);
        assert_eq!(table.player(&name("bob")).unwrap().seat_position, 2);
    }

    #[test]
    fn test_reorder_players_rejects_wrong_set() {
        let mut table = table_with(&["alice", "bob"]);
        assert_eq!(
            table
                .reorder_players(&[name("alice"), name("mallory")])
                .unwrap_err(),
            TableError::NotAPermutation
        );
        // Duplicates are not a permutation either.
        assert_eq!(
            table
                .reorder_players(&[name("alice"), name("alice"), name("bob")])
                .unwrap_err(),
            TableError::NotAPermutation
        );
    }

    #[test]
    fn test_start_hand_requires_two_players() {
        let mut table = table_with(&["alice"]);
        assert_eq!(
            table.start_hand(Blinds::default()).unwrap_err(),
            TableError::NotEnoughPlayers
        );
        assert!(!table.is_active());
    }

    #[test]
    fn test_start_hand_posts_blinds_and_resets() {
        let mut table = table_with(&["alice", "bob", "carol"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();

        assert!(table.is_active());
        assert_eq!(table.current_round(), Round::Preflop);
        // Dealer at 0: bob posts small, carol posts big.
        assert_eq!(table.pot(), 15);
        assert_eq!(table.player(&name("bob")).unwrap().chips, 995);
        assert_eq!(table.player(&name("carol")).unwrap().chips, 990);
        assert_eq!(table.player(&name("alice")).unwrap().chips, 1000);
        assert_eq!(table.player(&name("alice")).unwrap().hands_played, 1);
    }

    #[test]
    fn test_start_hand_clears_previous_log() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();
        table.end_hand().unwrap();
        table.start_hand(Blinds::default()).unwrap();

        // Only this hand's entries remain: gameStart + two blinds.
        let kinds: Vec<_> = table
            .activity_log()
            .iter()
            .map(|e| matches!(e.activity, Activity::GameStart))
            .collect();
        assert_eq!(table.activity_log().len(), 3);
        assert_eq!(kinds.iter().filter(|is_start| **is_start).count(), 1);
    }

    #[test]
    fn test_short_stack_skips_blind_entirely() {
        let mut table = Table::new();
        table.add_player(Player::new(name("alice"), 1000)).unwrap();
        table.add_player(Player::new(name("bob"), 1000)).unwrap();
        table.add_player(Player::new(name("carol"), 3)).unwrap();
        // Dealer at 0: bob posts small 5, carol (3 chips) is below the big
        // blind and posts nothing at all.
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        assert_eq!(table.pot(), 5);
        assert_eq!(table.player(&name("carol")).unwrap().chips, 3);
    }

    #[test]
    fn test_two_player_blind_wraparound() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        // Seats mod 2: small blind at seat 1 (bob), big blind wraps to
        // seat 0 (alice, the dealer).
        assert_eq!(table.player(&name("bob")).unwrap().chips, 995);
        assert_eq!(table.player(&name("alice")).unwrap().chips, 990);
        assert_eq!(table.pot(), 15);
    }

    #[test]
    fn test_place_bet_requires_active_hand() {
        let mut table = table_with(&["alice", "bob"]);
        assert_eq!(
            table.place_bet(&name("alice"), 10).unwrap_err(),
            TableError::HandNotActive
        );
    }

    #[test]
    fn test_place_bet_rejects_folded_player() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();
        table.fold_player(&name("alice")).unwrap();
        assert_eq!(
            table.place_bet(&name("alice"), 10).unwrap_err(),
            TableError::PlayerFolded
        );
    }

    #[test]
    fn test_place_bet_rejects_overbet() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();
        let available = table.player(&name("alice")).unwrap().chips;
        assert_eq!(
            table.place_bet(&name("alice"), available + 1).unwrap_err(),
            TableError::InsufficientChips {
                available,
                required: available + 1,
            }
        );
        // Rejection leaves the pot untouched.
        assert_eq!(table.pot(), 15);
    }

    #[test]
    fn test_place_bet_moves_amount_into_pot() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        let chips_before = table.player(&name("alice")).unwrap().chips;
        let pot_before = table.pot();

        table.place_bet(&name("alice"), 50).unwrap();

        assert_eq!(table.player(&name("alice")).unwrap().chips, chips_before - 50);
        assert_eq!(table.pot(), pot_before + 50);
    }

    #[test]
    fn test_unfold_player_logs_return() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();
        table.fold_player(&name("alice")).unwrap();
        table.unfold_player(&name("alice")).unwrap();
        assert!(!table.player(&name("alice")).unwrap().folded);
        let last = table.activity_log().last().unwrap();
        assert_eq!(
            last.activity,
            Activity::Fold {
                username: name("alice"),
                folded: false,
            }
        );
    }

    #[test]
    fn test_next_round_walks_sequence_then_fails() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();

        assert_eq!(table.next_round().unwrap(), Round::Flop);
        assert_eq!(table.next_round().unwrap(), Round::Turn);
        assert_eq!(table.next_round().unwrap(), Round::River);
        assert_eq!(table.next_round().unwrap_err(), TableError::AtFinalRound);
        assert_eq!(table.current_round(), Round::River);
    }

    #[test]
    fn test_next_round_resets_current_bets_not_pot() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        table.place_bet(&name("alice"), 20).unwrap();
        let pot = table.pot();

        table.next_round().unwrap();

        assert_eq!(table.player(&name("alice")).unwrap().current_bet, 0);
        assert_eq!(table.player(&name("bob")).unwrap().current_bet, 0);
        assert_eq!(table.pot(), pot);
        assert!(table.player(&name("alice")).unwrap().total_bet > 0);
    }

    #[test]
    fn test_distribute_pot_bounds() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        let pot = table.pot();

        assert_eq!(
            table.distribute_pot(&name("alice"), 0).unwrap_err(),
            TableError::InvalidAmount(0)
        );
        assert_eq!(
            table.distribute_pot(&name("alice"), pot + 1).unwrap_err(),
            TableError::InvalidAmount(pot + 1)
        );
        assert_eq!(table.pot(), pot);
    }

    #[test]
    fn test_distribute_pot_may_split() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 10, big: 10 }).unwrap();
        assert_eq!(table.pot(), 20);

        table.distribute_pot(&name("alice"), 10).unwrap();
        table.distribute_pot(&name("bob"), 10).unwrap();

        assert_eq!(table.pot(), 0);
        assert_eq!(table.player(&name("alice")).unwrap().hands_won, 1);
        assert_eq!(table.player(&name("bob")).unwrap().hands_won, 1);
    }

    #[test]
    fn test_end_hand_advances_dealer() {
        let mut table = table_with(&["alice", "bob", "carol"]);
        table.start_hand(Blinds::default()).unwrap();
        assert_eq!(table.dealer_index(), 0);

        table.end_hand().unwrap();

        assert!(!table.is_active());
        assert_eq!(table.dealer_index(), 1);
        assert_eq!(table.end_hand().unwrap_err(), TableError::HandNotActive);
    }

    #[test]
    fn test_end_hand_with_empty_table_after_exodus() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();
        table.remove_player(&name("alice")).unwrap();
        table.remove_player(&name("bob")).unwrap();

        // Dealer advancement must not divide by zero.
        table.end_hand().unwrap();
        assert_eq!(table.dealer_index(), 0);
    }

    #[test]
    fn test_adjust_chips_delegates_and_reports_clamp() {
        let mut table = table_with(&["alice", "bob"]);
        let log_len = table.activity_log().len();

        assert_eq!(table.adjust_chips(&name("alice"), -5000).unwrap(), -1000);
        assert_eq!(table.player(&name("alice")).unwrap().chips, 0);
        assert_eq!(
            table.adjust_chips(&name("mallory"), 10).unwrap_err(),
            TableError::UnknownPlayer
        );
        // No activity entry for administrative corrections.
        assert_eq!(table.activity_log().len(), log_len);
    }

    #[test]
    fn test_snapshot_orders_players_by_seat() {
        let mut table = table_with(&["alice", "bob", "carol"]);
        table
            .reorder_players(&[name("carol"), name("alice"), name("bob")])
            .unwrap();

        let snapshot = table.snapshot();
        let names: Vec<_> = snapshot.players.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec![name("carol"), name("alice"), name("bob")]);
        assert_eq!(snapshot.round_name, "Pre-Flop");
        assert_eq!(snapshot.small_blind, 5);
        assert_eq!(snapshot.big_blind, 10);
    }

    #[test]
    fn test_restore_round_trips_snapshot() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
        table.place_bet(&name("alice"), 25).unwrap();
        table.next_round().unwrap();

        let snapshot = table.snapshot();
        let restored = Table::restore(snapshot.clone()).unwrap();

        assert_eq!(restored.snapshot(), snapshot);
        assert!(restored.is_active());
        assert_eq!(restored.current_round(), Round::Flop);
        assert_eq!(restored.pot(), table.pot());
    }

    #[test]
    fn test_restore_rejects_inconsistent_seating() {
        let mut table = table_with(&["alice", "bob"]);
        table.start_hand(Blinds::default()).unwrap();

        let mut snapshot = table.snapshot();
        snapshot.seating_order.push(name("mallory"));

        assert_eq!(
            Table::restore(snapshot).unwrap_err(),
            TableError::NotAPermutation
        );
    }
}
