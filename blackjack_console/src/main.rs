use blackjack_core::prelude::*;
use clap::Parser;
use log::info;
use std::io::{self, Write};

/// Console blackjack table for two to seven seated players.
#[derive(Parser, Debug)]
#[command(name = "blackjack_console")]
struct Args {
    /// Names of the seated players, in seating order. When omitted the table
    /// asks for a player count and then a name per seat.
    names: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.names.is_empty() && !(2..=7).contains(&args.names.len()) {
        eprintln!("error: expected between 2 and 7 player names");
        std::process::exit(1);
    }

    let mut ui = ConsoleInteraction::new();
    ui.display("Welcome to the Black Jack Game!\n");

    let names = if args.names.is_empty() {
        ask_names(&mut ui)
    } else {
        args.names
    };
    info!("seating {} players", names.len());

    let mut game = BlackjackGame::new(names);
    loop {
        game.play(&mut ui);
        if !ui.ask_yes_no("Do you want to play again? (Y/N) ") {
            break;
        }
    }
}

/// Interactive fallback when no names were passed on the command line.
fn ask_names(ui: &mut dyn Interaction) -> Vec<String> {
    let count = ui.ask_number_in_range("How many players are playing? (2-7) ", 2, 8);
    (1..=count).map(read_name).collect()
}

fn read_name(seat: u32) -> String {
    print!("Player {} Name : ", seat);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_ok() {
        let name = line.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    format!("Player {}", seat)
}
