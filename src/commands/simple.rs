//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI: one whole word per line.

use crate::game::{GameEngine, Notification};
use crate::output::print_game;
use std::io::{self, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Cheat,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "cheat" => Input::Cheat,
        _ => Input::Guess(line.trim().to_uppercase()),
    }
}

/// Run the simple interactive CLI mode
///
/// The board is printed by an observer after every change. The first game
/// uses `first_secret` when given; later games pick a random secret.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut engine: GameEngine, first_secret: Option<&str>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a 5-letter word and press Enter to guess.");
    println!("Commands: 'new' for a new game, 'cheat' to reveal the word, 'quit' to exit\n");

    engine.add_observer(|engine: &GameEngine, notification: Notification| {
        print_game(engine, notification.message());
    });

    match first_secret {
        Some(secret) => engine.new_game_with(secret.to_uppercase()),
        None => engine.new_game(),
    }

    loop {
        let prompt = if engine.is_over() {
            "'new' or 'quit'"
        } else {
            "Guess"
        };

        let Some(line) = get_user_input(prompt)? else {
            // EOF
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => engine.new_game(),
            Input::Cheat => {
                if let Some(secret) = engine.secret() {
                    println!(
                        "Number of guesses: {}\tYou cheated! The secret word is: {secret}",
                        engine.num_attempts()
                    );
                }
            }
            Input::Guess(word) => engine.enter_guess(&word),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
