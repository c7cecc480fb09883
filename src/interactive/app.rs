//! TUI application state and logic

use crate::game::{GameEngine, IllegalReason, Notification};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use tracing::debug;

/// Application state
pub struct App {
    pub engine: GameEngine,
    notifications: Receiver<Notification>,
    pub last_notification: Notification,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub cheated: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Wrap an engine and start the first game
    ///
    /// The first game uses `first_secret` when given.
    #[must_use]
    pub fn new(mut engine: GameEngine, first_secret: Option<&str>) -> Self {
        let (tx, rx) = mpsc::channel();
        engine.add_observer(tx);

        let mut app = Self {
            engine,
            notifications: rx,
            last_notification: Notification::Ongoing,
            messages: vec![Message {
                text: "Welcome! Guess the hidden 5-letter word in 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            cheated: false,
            should_quit: false,
        };

        match first_secret {
            Some(secret) => app.engine.new_game_with(secret.to_uppercase()),
            None => app.engine.new_game(),
        }
        app.process_notifications();
        app
    }

    /// Apply every notification queued since the last call
    pub fn process_notifications(&mut self) {
        let pending: Vec<Notification> = self.notifications.try_iter().collect();
        for notification in pending {
            self.handle_notification(notification);
        }
    }

    fn handle_notification(&mut self, notification: Notification) {
        debug!(%notification, "notification received");
        self.last_notification = notification;

        match notification {
            Notification::Won => {
                let guess_count = self.engine.num_attempts();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                    *slot += 1;
                }

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Notification::Lost => {
                self.stats.total_games += 1;
                let secret = self.engine.secret().unwrap_or_default().to_string();
                self.add_message(
                    &format!("Out of tries! The word was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Notification::IllegalWord(reason) => {
                let detail = match reason {
                    IllegalReason::Incomplete => "Not enough letters.",
                    IllegalReason::WrongLength => "Word must be exactly 5 letters.",
                    IllegalReason::NotInDictionary => "Not in word list.",
                };
                self.add_message(
                    &format!("{} {detail}", notification.message()),
                    MessageStyle::Error,
                );
            }
            Notification::Ongoing => {}
        }
    }

    pub fn new_game(&mut self) {
        self.cheated = false;
        self.engine.new_game();
        self.add_message("New game started!", MessageStyle::Info);
        self.process_notifications();
    }

    pub fn enter_letter(&mut self, ch: char) {
        if ch.is_ascii_alphabetic() {
            self.engine.enter_char(ch.to_ascii_uppercase());
            self.process_notifications();
        }
    }

    pub fn confirm(&mut self) {
        self.engine.confirm_guess();
        self.process_notifications();
    }

    /// Reveal the secret in the status bar
    pub fn cheat(&mut self) {
        self.cheated = true;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Char('r') if ctrl => app.cheat(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('q') if app.engine.is_over() => app.should_quit = true,
                KeyCode::Char('n') if app.engine.is_over() => app.new_game(),
                KeyCode::Char(c) => app.enter_letter(c),
                KeyCode::Enter => app.confirm(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
