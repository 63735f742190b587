use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The thirteen card ranks, declared in the order a fresh deck is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Blackjack value of the rank before any soft-ace adjustment: aces count
    /// as 1, face cards as 10.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        write!(f, "{}", label)
    }
}

/// The four suits, declared in the order a fresh deck is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Hearts, Suit::Spades];
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Suit::Club => "Club",
            Suit::Diamond => "Diamond",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", label)
    }
}

/// A single playing card. The rank and suit never change once the card is
/// created; only the face-up flag is mutable, and only through `flip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    face_up: bool,
}

impl Card {
    /// Associated function to create a new face-up `Card`.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Method for turning the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Scoring value of the card. A face-down card has no determinable value,
    /// which is signalled as `None` rather than zero.
    pub fn value(&self) -> Option<u8> {
        if self.face_up {
            Some(self.rank.value())
        } else {
            None
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{} of {}", self.rank, self.suit)
        } else {
            write!(f, "Card Face Down")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_follow_blackjack_rules() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn flipping_hides_the_value_and_the_face() {
        let mut card = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(card.value(), Some(10));
        assert_eq!(card.to_string(), "Queen of Hearts");

        card.flip();
        assert_eq!(card.value(), None);
        assert_eq!(card.to_string(), "Card Face Down");

        card.flip();
        assert_eq!(card.value(), Some(10));
    }
}
