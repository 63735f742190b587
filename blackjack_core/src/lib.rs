//! Core engine for a console game of blackjack: cards, hands, the deck,
//! scoring rules, the participants, and the round state machine. All user
//! interaction flows through the [`interaction::Interaction`] port, so the
//! engine itself never touches a terminal.

pub mod card;
pub mod deck;
pub mod game;
pub mod hand;
pub mod interaction;
pub mod rules;

pub mod prelude {
    pub use crate::card::{Card, Rank, Suit};
    pub use crate::deck::Deck;
    pub use crate::game::player::{Dealer, Outcome, Player};
    pub use crate::game::BlackjackGame;
    pub use crate::hand::Hand;
    pub use crate::interaction::{ConsoleInteraction, Interaction, ScriptedInteraction};
    pub use crate::rules::{hand_total, Total};
    pub use crate::BlackjackGameError;
}

pub use prelude::*;

use thiserror::Error;

/// Errors raised while a round is in progress. Deck exhaustion is the only
/// recoverable runtime condition: the round engine reports it through the
/// interaction port and carries on with whatever cards were dealt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlackjackGameError {
    /// The deck ran dry partway through a deal; `dealt` of the `requested`
    /// cards reached a hand before the deck emptied.
    #[error("Can't continue deal. Out of cards!")]
    DeckExhausted { requested: usize, dealt: usize },
}
