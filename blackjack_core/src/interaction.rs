//! The port through which the round engine talks to a human. The engine only
//! ever calls these three methods, so anything that can answer a yes/no
//! question and print a line of text can drive a game.

use std::collections::VecDeque;
use std::io::{self, Write};

pub trait Interaction {
    /// Asks a yes/no question, repeating the prompt until a recognizable
    /// answer arrives. Blocks until then.
    fn ask_yes_no(&mut self, prompt: &str) -> bool;

    /// Asks for an integer in `[low, high)`, re-prompting on malformed or
    /// out-of-range input. Blocks until a valid answer arrives.
    fn ask_number_in_range(&mut self, prompt: &str, low: u32, high: u32) -> u32;

    /// One-way output sink for hand and round rendering.
    fn display(&mut self, text: &str);
}

/// Terminal-backed implementation reading stdin and writing stdout.
#[derive(Debug, Default)]
pub struct ConsoleInteraction;

impl ConsoleInteraction {
    pub fn new() -> ConsoleInteraction {
        ConsoleInteraction
    }

    fn read_line(&self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            line.clear();
        }
        line.trim().to_string()
    }
}

impl Interaction for ConsoleInteraction {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            match self.read_line(prompt).to_lowercase().as_str() {
                "y" => return true,
                "n" => return false,
                _ => continue,
            }
        }
    }

    fn ask_number_in_range(&mut self, prompt: &str, low: u32, high: u32) -> u32 {
        loop {
            match self.read_line(prompt).parse::<u32>() {
                Ok(n) if (low..high).contains(&n) => return n,
                Ok(_) => continue,
                Err(_) => println!("Please enter an integer"),
            }
        }
    }

    fn display(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Scripted stand-in for `ConsoleInteraction`: answers come from pre-loaded
/// queues and everything displayed is captured in a transcript. Lets a full
/// round run without a terminal attached.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<bool>,
    numbers: VecDeque<u32>,
    pub transcript: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new() -> ScriptedInteraction {
        ScriptedInteraction::default()
    }

    /// Associated function for a script of yes/no answers, consumed in order.
    /// Once the script runs out every further question is answered "no".
    pub fn with_answers<I: IntoIterator<Item = bool>>(answers: I) -> ScriptedInteraction {
        ScriptedInteraction {
            answers: answers.into_iter().collect(),
            ..ScriptedInteraction::default()
        }
    }

    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn push_number(&mut self, number: u32) {
        self.numbers.push_back(number);
    }

    /// True if any captured line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Interaction for ScriptedInteraction {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn ask_number_in_range(&mut self, prompt: &str, low: u32, _high: u32) -> u32 {
        self.transcript.push(prompt.to_string());
        self.numbers.pop_front().unwrap_or(low)
    }

    fn display(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answers_are_consumed_in_order_then_default_to_no() {
        let mut ui = ScriptedInteraction::with_answers([true, false]);
        assert!(ui.ask_yes_no("hit?"));
        assert!(!ui.ask_yes_no("hit?"));
        assert!(!ui.ask_yes_no("hit?"));
        assert_eq!(ui.transcript.len(), 3);
    }

    #[test]
    fn scripted_numbers_fall_back_to_the_low_bound() {
        let mut ui = ScriptedInteraction::new();
        ui.push_number(4);
        assert_eq!(ui.ask_number_in_range("players?", 2, 8), 4);
        assert_eq!(ui.ask_number_in_range("players?", 2, 8), 2);
    }
}
