//! Game engine: secret selection, guess bookkeeping and win/loss detection
//!
//! The engine owns the whole board. Front ends feed it letters or whole
//! words and read its state back through the query methods; every change is
//! announced to the registered observers.

use super::{GameState, IllegalReason, Notification, Observer};
use crate::core::{LetterBag, LetterCell, NUM_TRIES, WORD_SIZE, evaluate_row, is_full_match};
use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, trace, warn};

/// One attempt: a row of the board
pub type Row = [LetterCell; WORD_SIZE];

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    EmptyWordList,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list must contain at least one word"),
        }
    }
}

impl std::error::Error for EngineError {}

/// The game model
///
/// A game is not playable until [`GameEngine::new_game`] or
/// [`GameEngine::new_game_with`] has been called; until then letters and
/// guesses are ignored. Register observers before starting the first game so
/// they see its initial notification.
pub struct GameEngine {
    words: Vec<String>,
    legal: FxHashSet<String>,
    rng: Box<dyn RngCore>,
    secret: Option<String>,
    secret_chars: Vec<char>,
    grid: [Row; NUM_TRIES],
    attempt: usize,
    cursor: usize,
    used: LetterBag,
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
}

impl GameEngine {
    /// Create an engine over a dictionary and a source of randomness
    ///
    /// `words` is both the pool secrets are drawn from and the list of legal
    /// guesses. Entries are used as given; nothing is filtered by length.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordle_game::game::{GameEngine, GameState};
    ///
    /// let words = vec!["ABIDE".to_string(), "ALIVE".to_string()];
    /// let mut engine = GameEngine::new(words, StdRng::seed_from_u64(7)).unwrap();
    /// engine.new_game_with("ABIDE");
    /// engine.enter_guess("ABIDE");
    /// assert_eq!(engine.state(), GameState::Won);
    /// ```
    pub fn new(words: Vec<String>, rng: impl RngCore + 'static) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }

        let legal = words.iter().cloned().collect();

        Ok(Self {
            words,
            legal,
            rng: Box::new(rng),
            secret: None,
            secret_chars: Vec::new(),
            grid: [[LetterCell::new(); WORD_SIZE]; NUM_TRIES],
            attempt: 0,
            cursor: 0,
            used: LetterBag::new(),
            state: GameState::Ongoing,
            observers: Vec::new(),
        })
    }

    /// Register an observer; it stays registered for the engine's lifetime
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start a new game with a secret drawn uniformly from the dictionary
    pub fn new_game(&mut self) {
        let index = self.rng.random_range(0..self.words.len());
        let secret = self.words[index].clone();
        self.start(secret);
    }

    /// Start a new game with a fixed secret
    ///
    /// The secret is not checked against the dictionary.
    pub fn new_game_with(&mut self, secret: impl Into<String>) {
        self.start(secret.into());
    }

    fn start(&mut self, secret: String) {
        trace!(%secret, "secret chosen");
        self.secret_chars = secret.chars().collect();
        self.secret = Some(secret);
        self.attempt = 0;
        self.cursor = 0;
        self.used.clear();
        self.grid = [[LetterCell::new(); WORD_SIZE]; NUM_TRIES];
        self.state = GameState::Ongoing;

        debug!("new game started");
        self.notify(Notification::Ongoing);
    }

    /// Type one letter into the next free slot of the current attempt
    ///
    /// Ignored once the row is full or the game is over.
    pub fn enter_char(&mut self, ch: char) {
        if !self.accepting_input() || self.cursor >= WORD_SIZE {
            return;
        }

        self.grid[self.attempt][self.cursor].set_char(ch);
        self.used.add(ch);
        trace!(%ch, pos = self.cursor, "letter entered");

        // Observers see the new letter before the cursor moves on
        self.notify(self.state.into());
        self.cursor += 1;
    }

    /// Enter a whole word as the current attempt and confirm it
    ///
    /// A word of the wrong length is reported as illegal without touching the
    /// board.
    pub fn enter_guess(&mut self, word: &str) {
        if !self.accepting_input() {
            return;
        }

        let letters: Vec<char> = word.chars().collect();
        if letters.len() != WORD_SIZE {
            debug!(%word, "guess has wrong length");
            self.notify(Notification::IllegalWord(IllegalReason::WrongLength));
            return;
        }

        for (cell, &ch) in self.grid[self.attempt].iter_mut().zip(&letters) {
            cell.set_char(ch);
            self.used.add(ch);
        }
        self.cursor = WORD_SIZE;
        self.confirm_guess();
    }

    /// Evaluate the current attempt
    ///
    /// An incomplete row or a word outside the dictionary is rolled back and
    /// reported as illegal. A legal word gets feedback and ends the attempt.
    pub fn confirm_guess(&mut self) {
        if !self.accepting_input() {
            return;
        }

        if self.cursor != WORD_SIZE {
            self.reject(IllegalReason::Incomplete);
            return;
        }

        let word: String = self.grid[self.attempt]
            .iter()
            .filter_map(LetterCell::char)
            .collect();
        if !self.legal.contains(&word) {
            self.reject(IllegalReason::NotInDictionary);
            return;
        }

        let attempt = self.attempt;
        evaluate_row(&mut self.grid[attempt], &self.secret_chars);

        self.state = if is_full_match(&self.grid[attempt]) {
            GameState::Won
        } else if attempt == NUM_TRIES - 1 {
            GameState::Lost
        } else {
            GameState::Ongoing
        };

        debug!(%word, attempt = attempt + 1, state = ?self.state, "guess evaluated");

        self.cursor = 0;
        self.attempt += 1;
        self.notify(self.state.into());
    }

    /// Clear the current row and give its letters back
    fn reject(&mut self, reason: IllegalReason) {
        for cell in &mut self.grid[self.attempt] {
            if let Some(ch) = cell.char() {
                self.used.remove_one(ch);
            }
            *cell = LetterCell::new();
        }
        self.cursor = 0;

        debug!(?reason, attempt = self.attempt + 1, "illegal word");
        self.notify(Notification::IllegalWord(reason));
    }

    fn accepting_input(&self) -> bool {
        if self.secret.is_none() {
            warn!("input ignored: no game started");
            return false;
        }
        self.state == GameState::Ongoing
    }

    fn notify(&mut self, notification: Notification) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.update(self, notification);
        }
        self.observers = observers;
    }

    // ******** Queries ********

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// True once the game is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The cell at (`attempt`, `pos`), or `None` if out of range
    #[must_use]
    pub fn cell(&self, attempt: usize, pos: usize) -> Option<&LetterCell> {
        self.grid.get(attempt)?.get(pos)
    }

    #[must_use]
    pub fn row(&self, attempt: usize) -> Option<&Row> {
        self.grid.get(attempt)
    }

    /// The whole board, one row per attempt
    #[must_use]
    pub const fn rows(&self) -> &[Row; NUM_TRIES] {
        &self.grid
    }

    /// Has this letter been typed by an entry still on the board?
    ///
    /// Includes letters of the attempt in progress.
    #[must_use]
    pub fn used_letter(&self, ch: char) -> bool {
        self.used.contains(ch)
    }

    #[must_use]
    pub const fn used_letters(&self) -> &LetterBag {
        &self.used
    }

    /// The secret of the current game, or `None` before the first game
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Number of attempts evaluated so far in this game
    #[inline]
    #[must_use]
    pub const fn num_attempts(&self) -> usize {
        self.attempt
    }

    /// Next slot to fill in the current attempt
    #[inline]
    #[must_use]
    pub const fn cursor_pos(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn legal_words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn is_legal(&self, word: &str) -> bool {
        self.legal.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status::{self, Empty, RightPos, WrongPos};
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::RefCell;
    use std::rc::Rc;

    const WORDS: &[&str] = &[
        "ABIDE", "ALIVE", "CRANE", "SLATE", "AABBB", "QUICK", "FLOUR", "PLANT",
    ];

    fn engine() -> GameEngine {
        let words = WORDS.iter().map(|&w| w.to_string()).collect();
        GameEngine::new(words, StdRng::seed_from_u64(42)).unwrap()
    }

    fn recorder(engine: &mut GameEngine) -> Rc<RefCell<Vec<Notification>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        engine.add_observer(move |_: &GameEngine, n: Notification| sink.borrow_mut().push(n));
        log
    }

    fn type_word(engine: &mut GameEngine, word: &str) {
        for ch in word.chars() {
            engine.enter_char(ch);
        }
    }

    fn statuses(engine: &GameEngine, attempt: usize) -> Vec<Status> {
        engine.row(attempt).unwrap().iter().map(LetterCell::status).collect()
    }

    fn assert_fresh_row(engine: &GameEngine, attempt: usize) {
        for cell in engine.row(attempt).unwrap() {
            assert_eq!(*cell, LetterCell::new());
        }
    }

    #[test]
    fn empty_word_list_rejected() {
        let result = GameEngine::new(Vec::new(), StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::EmptyWordList)));
    }

    #[test]
    fn input_ignored_before_first_game() {
        let mut engine = engine();
        let log = recorder(&mut engine);

        engine.enter_char('A');
        engine.enter_guess("ABIDE");
        engine.confirm_guess();

        assert_eq!(engine.secret(), None);
        assert_eq!(engine.cursor_pos(), 0);
        assert!(engine.used_letters().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn new_game_resets_everything() {
        let mut engine = engine();
        let log = recorder(&mut engine);
        engine.new_game_with("ABIDE");
        engine.enter_guess("CRANE");
        type_word(&mut engine, "SLA");

        engine.new_game();

        assert_eq!(engine.state(), GameState::Ongoing);
        assert_eq!(engine.num_attempts(), 0);
        assert_eq!(engine.cursor_pos(), 0);
        assert!(engine.used_letters().is_empty());
        for attempt in 0..NUM_TRIES {
            assert_fresh_row(&engine, attempt);
        }
        assert_eq!(log.borrow().last(), Some(&Notification::Ongoing));
    }

    #[test]
    fn random_secret_comes_from_word_list() {
        let mut engine = engine();
        for _ in 0..20 {
            engine.new_game();
            let secret = engine.secret().unwrap();
            assert!(WORDS.contains(&secret), "unexpected secret {secret}");
        }
    }

    #[test]
    fn same_seed_same_secrets() {
        let mut a = engine();
        let mut b = engine();
        for _ in 0..5 {
            a.new_game();
            b.new_game();
            assert_eq!(a.secret(), b.secret());
        }
    }

    #[test]
    fn single_word_list_is_deterministic() {
        let mut engine =
            GameEngine::new(vec!["CRANE".to_string()], StdRng::seed_from_u64(3)).unwrap();
        engine.new_game();
        assert_eq!(engine.secret(), Some("CRANE"));
    }

    #[test]
    fn mandated_secret_not_validated() {
        let mut engine = engine();
        engine.new_game_with("ZZZZZ");
        assert_eq!(engine.secret(), Some("ZZZZZ"));
        assert!(!engine.is_legal("ZZZZZ"));
    }

    #[test]
    fn enter_char_advances_cursor_and_records_letter() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        let log = recorder(&mut engine);

        for (i, ch) in "CRANE".chars().enumerate() {
            engine.enter_char(ch);
            assert_eq!(engine.cursor_pos(), i + 1);
            assert_eq!(engine.cell(0, i).unwrap().char(), Some(ch));
            assert_eq!(engine.cell(0, i).unwrap().status(), Empty);
            assert!(engine.used_letter(ch));
        }

        assert_eq!(log.borrow().len(), 5);
        assert!(log.borrow().iter().all(|n| *n == Notification::Ongoing));
    }

    #[test]
    fn extra_letters_dropped() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        type_word(&mut engine, "CRANE");
        let log = recorder(&mut engine);

        engine.enter_char('X');

        assert_eq!(engine.cursor_pos(), WORD_SIZE);
        assert!(!engine.used_letter('X'));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn observer_sees_letter_before_cursor_moves() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        engine.add_observer(move |e: &GameEngine, _: Notification| {
            let pos = e.cursor_pos();
            let ch = e.cell(0, pos).and_then(LetterCell::char);
            sink.borrow_mut().push((pos, ch, ch.is_some_and(|c| e.used_letter(c))));
        });

        type_word(&mut engine, "CR");

        assert_eq!(
            *seen.borrow(),
            vec![(0, Some('C'), true), (1, Some('R'), true)]
        );
    }

    #[test]
    fn alive_against_abide() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        type_word(&mut engine, "ALIVE");
        engine.confirm_guess();

        assert_eq!(
            statuses(&engine, 0),
            vec![RightPos, Empty, WrongPos, Empty, RightPos]
        );
        assert_eq!(engine.state(), GameState::Ongoing);
        assert_eq!(engine.num_attempts(), 1);
        assert_eq!(engine.cursor_pos(), 0);
    }

    #[test]
    fn duplicate_guess_letters_all_marked() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        engine.enter_guess("AABBB");

        assert_eq!(
            statuses(&engine, 0),
            vec![RightPos, WrongPos, WrongPos, WrongPos, WrongPos]
        );
    }

    #[test]
    fn correct_guess_wins_on_any_attempt() {
        for misses in 0..NUM_TRIES {
            let mut engine = engine();
            let log = recorder(&mut engine);
            engine.new_game_with("ABIDE");
            for _ in 0..misses {
                engine.enter_guess("CRANE");
            }

            type_word(&mut engine, "ABIDE");
            engine.confirm_guess();

            assert_eq!(engine.state(), GameState::Won);
            assert_eq!(engine.num_attempts(), misses + 1);
            assert_eq!(statuses(&engine, misses), vec![RightPos; WORD_SIZE]);
            assert_eq!(log.borrow().last(), Some(&Notification::Won));
        }
    }

    #[test]
    fn unlisted_secret_still_winnable_when_guess_is_legal() {
        let mut engine = engine();
        engine.new_game_with("CRANE");
        engine.enter_guess("CRANE");
        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn wrong_guesses_until_lost() {
        let mut engine = engine();
        let log = recorder(&mut engine);
        engine.new_game_with("ABIDE");

        for attempt in 0..NUM_TRIES - 1 {
            engine.enter_guess("CRANE");
            assert_eq!(engine.state(), GameState::Ongoing);
            assert_eq!(engine.num_attempts(), attempt + 1);
        }

        engine.enter_guess("SLATE");
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.num_attempts(), NUM_TRIES);
        assert!(engine.is_over());
        assert_eq!(log.borrow().last(), Some(&Notification::Lost));
    }

    #[test]
    fn illegal_word_rolls_back_row() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        engine.enter_guess("CRANE");
        let log = recorder(&mut engine);

        type_word(&mut engine, "CRAZY");
        assert_eq!(engine.used_letters().count('C'), 2);
        engine.confirm_guess();

        assert_eq!(
            log.borrow().last(),
            Some(&Notification::IllegalWord(IllegalReason::NotInDictionary))
        );
        assert_eq!(engine.state(), GameState::Ongoing);
        assert_eq!(engine.num_attempts(), 1);
        assert_eq!(engine.cursor_pos(), 0);
        assert_fresh_row(&engine, 1);

        // One instance of each rolled-back letter removed
        assert_eq!(engine.used_letters().count('C'), 1);
        assert_eq!(engine.used_letters().count('A'), 1);
        assert!(!engine.used_letter('Z'));
        assert!(!engine.used_letter('Y'));
        assert!(engine.used_letter('N'));
    }

    #[test]
    fn illegal_word_notified_once() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        let log = recorder(&mut engine);

        engine.enter_guess("ZZZZZ");

        assert_eq!(
            *log.borrow(),
            vec![Notification::IllegalWord(IllegalReason::NotInDictionary)]
        );
        assert_eq!(engine.state(), GameState::Ongoing);
        assert!(engine.used_letters().is_empty());
    }

    #[test]
    fn observer_sees_cleared_row_on_illegal_word() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        type_word(&mut engine, "QQQQQ");

        let cleared = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&cleared);
        engine.add_observer(move |e: &GameEngine, n: Notification| {
            if n.is_illegal() {
                *sink.borrow_mut() = Some(e.row(0).unwrap().iter().all(LetterCell::is_unset));
            }
        });
        engine.confirm_guess();

        assert_eq!(*cleared.borrow(), Some(true));
    }

    #[test]
    fn incomplete_row_is_illegal() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        let log = recorder(&mut engine);

        type_word(&mut engine, "AB");
        engine.confirm_guess();

        assert_eq!(
            log.borrow().last(),
            Some(&Notification::IllegalWord(IllegalReason::Incomplete))
        );
        assert_eq!(engine.cursor_pos(), 0);
        assert_eq!(engine.num_attempts(), 0);
        assert_fresh_row(&engine, 0);
        assert!(engine.used_letters().is_empty());
    }

    #[test]
    fn confirm_with_nothing_typed_is_illegal() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        let log = recorder(&mut engine);

        engine.confirm_guess();

        assert_eq!(
            *log.borrow(),
            vec![Notification::IllegalWord(IllegalReason::Incomplete)]
        );
        assert_eq!(engine.state(), GameState::Ongoing);
    }

    #[test]
    fn wrong_length_guess_leaves_board_alone() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        type_word(&mut engine, "CR");
        let log = recorder(&mut engine);

        engine.enter_guess("CRANES");

        assert_eq!(
            *log.borrow(),
            vec![Notification::IllegalWord(IllegalReason::WrongLength)]
        );
        assert_eq!(engine.cursor_pos(), 2);
        assert_eq!(engine.cell(0, 0).unwrap().char(), Some('C'));
        assert!(engine.used_letter('R'));
        assert!(!engine.used_letter('S'));
    }

    #[test]
    fn enter_guess_records_letters() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        engine.enter_guess("PLANT");

        for ch in "PLANT".chars() {
            assert!(engine.used_letter(ch));
        }
        assert_eq!(engine.used_letters().len(), 5);
        assert_eq!(engine.num_attempts(), 1);
    }

    #[test]
    fn terminal_state_ignores_input() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        engine.enter_guess("ABIDE");
        assert_eq!(engine.state(), GameState::Won);

        let before = *engine.rows();
        let log = recorder(&mut engine);

        engine.confirm_guess();
        engine.confirm_guess();
        engine.enter_char('C');
        engine.enter_guess("CRANE");

        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.num_attempts(), 1);
        assert_eq!(*engine.rows(), before);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn observers_called_in_registration_order() {
        let mut engine = engine();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let sink = Rc::clone(&order);
            engine.add_observer(move |_: &GameEngine, _: Notification| sink.borrow_mut().push(id));
        }

        engine.new_game_with("ABIDE");

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn channel_observer_queues_notifications() {
        let mut engine = engine();
        let (tx, rx) = std::sync::mpsc::channel();
        engine.add_observer(tx);

        engine.new_game_with("ABIDE");
        engine.enter_guess("ABIDE");

        let received: Vec<Notification> = rx.try_iter().collect();
        assert_eq!(received, vec![Notification::Ongoing, Notification::Won]);
    }

    #[test]
    fn out_of_range_queries() {
        let mut engine = engine();
        engine.new_game_with("ABIDE");
        assert!(engine.cell(NUM_TRIES, 0).is_none());
        assert!(engine.cell(0, WORD_SIZE).is_none());
        assert!(engine.row(NUM_TRIES).is_none());
    }
}
