use crate::card::{Card, Rank, Suit};
use crate::hand::Hand;
use crate::BlackjackGameError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Struct for the table's single deck of cards. The deck stores its cards in
/// a `Hand` and deals exclusively through `Hand::give`, so a card is never in
/// two places at once.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Hand,
}

impl Deck {
    /// Associated function to create a new empty `Deck`.
    pub fn new() -> Deck {
        Deck { cards: Hand::new() }
    }

    /// Associated function for a freshly populated, unshuffled deck.
    pub fn standard() -> Deck {
        let mut deck = Deck::new();
        deck.populate();
        deck
    }

    /// Associated function for a deck with a caller-chosen order, top card
    /// first. Useful for playing out a known sequence of deals.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        let mut deck = Deck::new();
        for card in cards {
            deck.cards.add(card);
        }
        deck
    }

    /// Appends one face-up card per (suit, rank) pair in canonical order,
    /// suits outer and ranks inner. Callers wanting a fresh 52-card deck must
    /// clear first; populating a non-empty deck appends duplicates.
    pub fn populate(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.add(Card::new(rank, suit));
            }
        }
    }

    /// Method for shuffling the deck into a uniformly random order.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with a caller-supplied source of randomness.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        self.cards.cards_mut().shuffle(rng);
    }

    /// Deals `per_hand` cards to each hand in the given order, always moving
    /// the top (index 0) card. If the deck runs dry mid-deal the remaining
    /// transfers are skipped and the shortfall is reported; cards already
    /// dealt stay where they landed.
    pub fn deal(
        &mut self,
        hands: &mut [&mut Hand],
        per_hand: usize,
    ) -> Result<(), BlackjackGameError> {
        let requested = hands.len() * per_hand;
        let mut dealt = 0;
        for _round in 0..per_hand {
            for hand in hands.iter_mut() {
                let top = match self.cards.cards().first() {
                    Some(card) => *card,
                    None => return Err(BlackjackGameError::DeckExhausted { requested, dealt }),
                };
                self.cards.give(&top, hand);
                dealt += 1;
            }
        }
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn populate_builds_the_full_fifty_two_card_universe() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);

        let distinct: HashSet<String> = deck.cards().iter().map(Card::to_string).collect();
        assert_eq!(distinct.len(), 52);
        assert!(deck.cards().iter().all(Card::is_face_up));

        // Canonical order: suits outer loop, ranks inner loop.
        assert_eq!(deck.cards()[0].to_string(), "Ace of Club");
        assert_eq!(deck.cards()[12].to_string(), "King of Club");
        assert_eq!(deck.cards()[13].to_string(), "Ace of Diamond");
        assert_eq!(deck.cards()[51].to_string(), "King of Spades");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut deck = Deck::standard();
        let before: Vec<String> = deck.cards().iter().map(Card::to_string).collect();

        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle_with(&mut rng);

        let after: Vec<String> = deck.cards().iter().map(Card::to_string).collect();
        assert_ne!(before, after);

        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
    }

    #[test]
    fn deal_moves_two_cards_per_hand_from_the_top() {
        let mut deck = Deck::standard();
        let expected_first = deck.cards()[0];
        let mut alice = Hand::new();
        let mut bob = Hand::new();
        let mut dealer = Hand::new();

        let result = deck.deal(&mut [&mut alice, &mut bob, &mut dealer], 2);

        assert!(result.is_ok());
        assert_eq!(deck.len(), 52 - 6);
        assert_eq!(alice.len(), 2);
        assert_eq!(bob.len(), 2);
        assert_eq!(dealer.len(), 2);
        assert_eq!(alice.cards()[0], expected_first);
    }

    #[test]
    fn an_exhausted_deck_reports_the_shortfall() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
        ]);
        let mut alice = Hand::new();
        let mut bob = Hand::new();

        let result = deck.deal(&mut [&mut alice, &mut bob], 2);

        assert_eq!(
            result,
            Err(BlackjackGameError::DeckExhausted {
                requested: 4,
                dealt: 3
            })
        );
        // Already-dealt cards are not rolled back.
        assert_eq!(alice.len(), 2);
        assert_eq!(bob.len(), 1);
        assert!(deck.is_empty());
    }
}
