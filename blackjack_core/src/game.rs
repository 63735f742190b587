//! Module that runs a full round of console blackjack: the initial deal,
//! each player's turn, the dealer's turn under the house rule, outcome
//! resolution, and the between-round cleanup.

pub mod player;

pub mod prelude {
    pub use super::player::{Dealer, Outcome, Player};
    pub use super::BlackjackGame;
}

pub use prelude::*;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::interaction::Interaction;
use log::{debug, warn};

/// Struct for one table of blackjack: the seated players, the dealer, and
/// the single deck they all draw from. The players and the dealer persist
/// across rounds; only their hands reset.
pub struct BlackjackGame {
    players: Vec<Player>,
    dealer: Dealer,
    deck: Deck,
}

impl BlackjackGame {
    /// Associated function for building a new game: one player per name, in
    /// seating order, plus the dealer. The deck is populated and shuffled
    /// once here; `play` never reshuffles, so a long enough session will
    /// eventually run it dry.
    pub fn new(names: Vec<String>) -> BlackjackGame {
        let mut deck = Deck::standard();
        deck.shuffle();
        BlackjackGame::with_deck(names, deck)
    }

    /// Associated function for a game over a prepared deck, left exactly in
    /// the order given. Lets a round play out a known sequence of deals.
    pub fn with_deck(names: Vec<String>, deck: Deck) -> BlackjackGame {
        let players = names.into_iter().map(Player::new).collect();
        BlackjackGame {
            players,
            dealer: Dealer::new(),
            deck,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The players who have not busted, still eligible to compare totals
    /// against the dealer.
    pub fn still_playing(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_busted()).collect()
    }

    /// Runs exactly one round, returning after every hand has been cleared.
    pub fn play(&mut self, ui: &mut dyn Interaction) {
        self.deal_initial(ui);

        // Opening view of the table, dealer's hole card hidden.
        for player in &self.players {
            ui.display(&player.to_string());
        }
        ui.display(&self.dealer.to_string());

        self.player_turns(ui);

        self.dealer.reveal_hole_card();

        if self.still_playing().is_empty() {
            ui.display(&format!(
                "Dealer wins! You guys are sucked at Black Jack {}",
                self.dealer
            ));
        } else {
            ui.display(&self.dealer.to_string());
            self.dealer_turn(ui);
            self.resolve(ui);
        }

        self.cleanup();
    }

    /// Two cards to every player in seating order, then two to the dealer,
    /// whose first card is turned face-down until the players have acted.
    fn deal_initial(&mut self, ui: &mut dyn Interaction) {
        let mut hands: Vec<&mut Hand> = self.players.iter_mut().map(Player::hand_mut).collect();
        hands.push(self.dealer.hand_mut());
        if let Err(e) = self.deck.deal(&mut hands, 2) {
            warn!("initial deal came up short: {:?}", e);
            ui.display(&e.to_string());
        }
        self.dealer.reveal_hole_card();
    }

    /// Each player in seating order keeps drawing until they decline, bust,
    /// or the deck runs out of cards to give them.
    fn player_turns(&mut self, ui: &mut dyn Interaction) {
        for idx in 0..self.players.len() {
            while !self.players[idx].is_busted() && self.players[idx].is_hitting(ui) {
                if let Err(e) = self.deck.deal(&mut [self.players[idx].hand_mut()], 1) {
                    warn!("hit for {} came up short: {:?}", self.players[idx].name(), e);
                    ui.display(&e.to_string());
                }
                ui.display(&self.players[idx].to_string());
                if self.players[idx].is_busted() {
                    self.players[idx].busted(ui);
                }
            }
        }
    }

    /// The dealer draws under the house rule. An exhausted deck ends the
    /// draw; the dealer stands on whatever it holds.
    fn dealer_turn(&mut self, ui: &mut dyn Interaction) {
        while !self.dealer.is_busted() && self.dealer.is_hitting() {
            if let Err(e) = self.deck.deal(&mut [self.dealer.hand_mut()], 1) {
                warn!("dealer draw came up short: {:?}", e);
                ui.display(&e.to_string());
                break;
            }
            ui.display(&self.dealer.to_string());
            if self.dealer.is_busted() {
                self.dealer.busted(ui);
            }
        }
    }

    /// A busted dealer loses to every surviving player; otherwise each
    /// surviving player's total is compared against the dealer's.
    fn resolve(&self, ui: &mut dyn Interaction) {
        if self.dealer.is_busted() {
            for player in self.still_playing() {
                player.report(Outcome::Win, ui);
            }
            return;
        }

        let dealer_total = self.dealer.total();
        for player in self.still_playing() {
            let outcome = match (player.total().value(), dealer_total.value()) {
                (Some(p), Some(d)) if p > d => Outcome::Win,
                (Some(p), Some(d)) if p < d => Outcome::Lose,
                _ => Outcome::Push,
            };
            player.report(outcome, ui);
        }
    }

    /// Clears every hand. The deck is left as-is between rounds: whatever
    /// cards and order remain carry into the next round.
    fn cleanup(&mut self) {
        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.dealer.hand_mut().clear();
        debug!("round over, {} cards left in the deck", self.deck.len());
    }
}
