use crate::hand::Hand;
use crate::interaction::Interaction;
use crate::rules::{hand_total, Total};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How a hand fared against the dealer at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

/// Renders the one-line view of a participant's hand, with the total in
/// parentheses whenever it is computable.
fn hand_line(name: &str, hand: &Hand) -> String {
    let mut line = format!("{}:\t{}", name, hand);
    if let Total::Known(total) = hand_total(hand.cards()) {
        line.push_str(&format!("({})", total));
    }
    line
}

/// Struct for a seated player. Holds no state beyond a name and a hand; the
/// decision to draw another card is delegated to the interaction port.
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Associated function to create a new `Player` with an empty hand.
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn total(&self) -> Total {
        hand_total(self.hand.cards())
    }

    pub fn is_busted(&self) -> bool {
        self.total().is_busted()
    }

    /// Whether the player wants another card.
    pub fn is_hitting(&self, ui: &mut dyn Interaction) -> bool {
        ui.ask_yes_no(&format!("\n{}, do you want to hit (Y/N) ", self.name))
    }

    /// Reports the bust; busting is also a loss, so both lines are shown.
    pub fn busted(&self, ui: &mut dyn Interaction) {
        ui.display(&format!("{} busted", self.name));
        self.report(Outcome::Lose, ui);
    }

    /// Method for reporting the round outcome to the player.
    pub fn report(&self, outcome: Outcome, ui: &mut dyn Interaction) {
        let verb = match outcome {
            Outcome::Win => "wins",
            Outcome::Lose => "loses",
            Outcome::Push => "pushes",
        };
        ui.display(&format!("{} {}", self.name, verb));
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hand_line(&self.name, &self.hand))
    }
}

/// Struct for the dealer. Unlike a `Player` the dealer never consults the
/// interaction port: the house rule alone decides whether it draws.
#[derive(Debug)]
pub struct Dealer {
    name: String,
    hand: Hand,
}

impl Dealer {
    /// Associated function to create a new `Dealer` with an empty hand.
    pub fn new() -> Dealer {
        Dealer {
            name: "Dealer".to_string(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn total(&self) -> Total {
        hand_total(self.hand.cards())
    }

    pub fn is_busted(&self) -> bool {
        self.total().is_busted()
    }

    /// House rule: the dealer draws while its known total is under 17. With
    /// the hole card still hidden the total is unknown and the dealer stands
    /// pat, so the hole card must be revealed before the dealer's turn.
    pub fn is_hitting(&self) -> bool {
        matches!(self.total(), Total::Known(total) if total < 17)
    }

    /// The dealer has no opponent-style loss bookkeeping, so only the bust
    /// itself is reported.
    pub fn busted(&self, ui: &mut dyn Interaction) {
        ui.display(&format!("{} busted", self.name));
    }

    /// Flips the dealer's first card: called once after the initial deal to
    /// hide the hole card and once more to reveal it.
    pub fn reveal_hole_card(&mut self) {
        if let Some(card) = self.hand.first_mut() {
            card.flip();
        }
    }
}

impl Default for Dealer {
    fn default() -> Dealer {
        Dealer::new()
    }
}

impl Display for Dealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hand_line(&self.name, &self.hand))
    }
}
