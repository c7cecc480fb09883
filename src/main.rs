//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, with a full-screen TUI or a line-oriented mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use wordle_game::{
    commands::{check_word, run_simple},
    game::GameEngine,
    logging::init_tracing,
    output::print_check_result,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Secret word for the first game (later games pick at random)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word to compare against
        secret: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Cannot read word file {path}")),
    }
}

fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let words = load_wordlist(&cli.wordlist)?;
    tracing::debug!(count = words.len(), "dictionary loaded");

    let rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    Ok(GameEngine::new(words, rng)?)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { guess, secret } => run_check_command(guess, secret),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let engine = build_engine(cli)?;
    let app = App::new(engine, cli.secret.as_deref());
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let engine = build_engine(cli)?;
    run_simple(engine, cli.secret.as_deref()).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(guess: &str, secret: &str) -> Result<()> {
    let result = check_word(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result.guess, &result.secret, &result.statuses);
    Ok(())
}
