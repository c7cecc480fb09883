//! Coloured terminal printing for the line-oriented front end

use super::formatters::{KEYBOARD_ROWS, KeyHint, key_hint, statuses_to_emoji, status_line};
use crate::core::{LetterCell, Status};
use crate::game::GameEngine;
use colored::{ColoredString, Colorize};

fn colored_cell(cell: &LetterCell) -> ColoredString {
    let text = format!(" {} ", cell.char().unwrap_or(' '));
    match cell.status() {
        Status::RightPos => text.black().on_green().bold(),
        Status::WrongPos => text.black().on_yellow().bold(),
        Status::Empty if cell.is_unset() => text.on_bright_black(),
        Status::Empty => text.white().on_black().bold(),
    }
}

fn colored_key(ch: char, hint: KeyHint) -> ColoredString {
    let text = ch.to_string();
    match hint {
        KeyHint::Correct => text.green().bold(),
        KeyHint::Present => text.yellow().bold(),
        KeyHint::Used => text.bright_black(),
        KeyHint::Unused => text.bright_white(),
    }
}

/// Print the status line, the board and the keyboard
pub fn print_game(engine: &GameEngine, message: &str) {
    println!("\n{}", status_line(engine, message).bright_cyan());
    print_board(engine);
    print_keyboard(engine);
}

/// Print every attempt row
pub fn print_board(engine: &GameEngine) {
    println!("{}", "─".repeat(21).cyan());
    for (attempt, row) in engine.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| colored_cell(c).to_string()).collect();
        println!(" {} {}", (attempt + 1).to_string().bright_black(), cells.join(""));
    }
    println!("{}", "─".repeat(21).cyan());
}

/// Print the keyboard coloured by what the board has revealed
pub fn print_keyboard(engine: &GameEngine) {
    for keys in KEYBOARD_ROWS {
        let line: Vec<String> = keys
            .chars()
            .map(|ch| colored_key(ch, key_hint(engine, ch)).to_string())
            .collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the result of a one-shot feedback check
pub fn print_check_result(guess: &str, secret: &str, statuses: &[Status]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.bright_yellow().bold(),
        secret.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let letters: Vec<String> = guess
        .chars()
        .zip(statuses)
        .map(|(ch, &status)| {
            let mut cell = LetterCell::new();
            cell.set_char(ch);
            cell.set_status(status);
            colored_cell(&cell).to_string()
        })
        .collect();

    println!("\n  {}", letters.join(""));
    println!("  {}", statuses_to_emoji(statuses));

    if !statuses.is_empty() && statuses.iter().all(|&s| s == Status::RightPos) {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
