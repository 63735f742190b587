//! Scoring rules for a blackjack hand. The total is a pure function of the
//! visible cards; nothing here touches game state.

use crate::card::{Card, Rank};

/// The value of a hand, which is unknowable while any of its cards is still
/// face-down (the dealer's hole card during player turns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Total {
    Known(u8),
    Unknown,
}

impl Total {
    pub fn value(self) -> Option<u8> {
        match self {
            Total::Known(v) => Some(v),
            Total::Unknown => None,
        }
    }

    /// A hand busts when its known total exceeds 21. An unknown total never
    /// counts as busted.
    pub fn is_busted(self) -> bool {
        matches!(self, Total::Known(v) if v > 21)
    }
}

/// Computes the blackjack total of `cards`. Every ace is first counted as 1;
/// a single ace is then promoted to 11 when the raw sum allows it, so a hand
/// never has more than one soft ace.
pub fn hand_total(cards: &[Card]) -> Total {
    let mut sum: u8 = 0;
    for card in cards {
        match card.value() {
            Some(v) => sum = sum.saturating_add(v),
            None => return Total::Unknown,
        }
    }

    let has_ace = cards.iter().any(|c| c.rank == Rank::Ace);
    if has_ace && sum <= 11 {
        sum += 10;
    }

    Total::Known(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn total_without_aces_is_the_plain_sum() {
        assert_eq!(hand_total(&[card(Rank::Ten), card(Rank::Nine)]), Total::Known(19));
        assert_eq!(
            hand_total(&[card(Rank::Two), card(Rank::Five), card(Rank::King)]),
            Total::Known(17)
        );
    }

    #[test]
    fn a_single_ace_is_promoted_when_it_fits() {
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::Nine)]), Total::Known(20));
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::King)]), Total::Known(21));
    }

    #[test]
    fn an_ace_stays_hard_when_promotion_would_bust() {
        // Raw sum is 15, already past the promotion threshold.
        assert_eq!(
            hand_total(&[card(Rank::Ace), card(Rank::Nine), card(Rank::Five)]),
            Total::Known(15)
        );
    }

    #[test]
    fn at_most_one_ace_is_promoted() {
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::Ace)]), Total::Known(12));
        assert_eq!(
            hand_total(&[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]),
            Total::Known(21)
        );
    }

    #[test]
    fn a_face_down_card_makes_the_total_unknown() {
        let mut hole = card(Rank::King);
        hole.flip();
        assert_eq!(hand_total(&[card(Rank::Ten), hole]), Total::Unknown);
        assert!(!hand_total(&[card(Rank::Ten), hole]).is_busted());
    }

    #[test]
    fn busted_means_over_twenty_one() {
        let total = hand_total(&[card(Rank::Ten), card(Rank::Nine), card(Rank::King)]);
        assert_eq!(total, Total::Known(29));
        assert!(total.is_busted());
        assert!(!Total::Known(21).is_busted());
    }
}
