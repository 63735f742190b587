use crate::card::Card;
use std::fmt::Display;

/// An ordered collection of cards held by one participant. The deck keeps its
/// own cards in a `Hand` too, so every card in a session belongs to exactly
/// one `Hand` at a time and `give` is the only way a card changes owners.
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function to create a new empty `Hand`.
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access for in-place reordering; cards cannot be added or
    /// removed through this view.
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Mutable handle on the first card dealt. Index 0 is where the dealer's
    /// hole card lives.
    pub fn first_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Method for appending a card to the end of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from this hand and appends it to `other`. The card must
    /// currently be held by this hand; passing an absent card can only be an
    /// internal logic bug, so this panics rather than corrupting the session.
    pub fn give(&mut self, card: &Card, other: &mut Hand) {
        let idx = self
            .cards
            .iter()
            .position(|c| c == card)
            .expect("card is not held by this hand");
        let card = self.cards.remove(idx);
        other.add(card);
    }

    /// Method for emptying the hand between rounds.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cards.is_empty() {
            write!(f, "There is no cards left to be played")
        } else {
            for card in &self.cards {
                write!(f, "{}\t", card)?;
            }
            Ok(())
        }
    }
}
