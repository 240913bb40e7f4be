//! Slice Mode session
//!
//! Drives rounds: picks a base word, shuffles it into a letter pool, scores
//! submissions, advances on a full clear and ends when time runs out or the
//! last round is cleared.

use super::config::GameConfig;
use super::countdown::{Countdown, Tick};
use super::error::GameError;
use super::round::Round;
use crate::matcher::Validation;
use crate::wordlists::Dictionary;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Re-draws allowed when the random start word repeats the previous one
const START_WORD_RETRIES: usize = 10;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    TimeUp,
    AllRoundsCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver(GameOverReason),
}

/// What a finished round looked like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub base_word: String,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
}

impl RoundSummary {
    fn from_round(round: &Round) -> Self {
        Self {
            base_word: round.base_word().to_string(),
            found: to_owned(round.found_sorted()),
            missing: to_owned(round.missing()),
            score: round.score(),
        }
    }
}

fn to_owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

/// Pick a start word at random, re-drawing a few times to avoid `previous`
///
/// Returns `None` only when `words` is empty.
pub fn pick_start_word<'a, R: Rng + ?Sized>(
    words: &'a [String],
    previous: Option<&str>,
    rng: &mut R,
) -> Option<&'a str> {
    let mut chosen = words.choose(rng)?;

    if words.len() > 1 {
        let mut tries = 0;
        while Some(chosen.as_str()) == previous && tries < START_WORD_RETRIES {
            chosen = words.choose(rng)?;
            tries += 1;
        }
    }

    Some(chosen.as_str())
}

/// A game of one or more timed rounds
pub struct Session<R: Rng> {
    config: GameConfig,
    dictionary: Dictionary,
    start_words: Vec<String>,
    rng: R,
    round: Round,
    rounds_played: usize,
    total_score: u32,
    countdown: Countdown,
    state: SessionState,
    summaries: Vec<RoundSummary>,
}

impl<R: Rng> Session<R> {
    /// Start a session and its first round
    ///
    /// # Errors
    /// Returns `GameError` if the configuration is invalid or there are no
    /// start words.
    pub fn new(
        config: GameConfig,
        dictionary: Dictionary,
        start_words: Vec<String>,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let config = config.validate()?;
        let base_word = pick_start_word(&start_words, None, &mut rng)
            .ok_or(GameError::NoStartWords)?
            .to_string();
        let round = Round::shuffled(&base_word, &dictionary, config.min_word_length, &mut rng);

        info!(
            "round 1 started with {} ({} possible words)",
            round.base_word(),
            round.possible().len()
        );

        Ok(Self {
            countdown: Countdown::new(config.round_duration, config.clock_warning),
            config,
            dictionary,
            start_words,
            rng,
            round,
            rounds_played: 1,
            total_score: 0,
            state: SessionState::Playing,
            summaries: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Rounds started so far, including the current one
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[inline]
    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver(_))
    }

    /// Finished rounds, oldest first
    #[inline]
    #[must_use]
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    /// Submit a word for the current round
    ///
    /// Returns `None` once the game is over. A full clear moves straight on
    /// to the next round, or ends the game after the last one.
    pub fn submit(&mut self, candidate: &str) -> Option<Validation> {
        if self.is_over() {
            return None;
        }

        let validation = self.round.submit(candidate);
        self.total_score += validation.score_delta;

        if validation.round_complete {
            self.advance_round();
        }

        Some(validation)
    }

    /// Submit the word spelled by a sequence of tile indices
    pub fn submit_indices(&mut self, indices: &[usize]) -> Option<Validation> {
        let candidate = self.round.word_from_indices(indices);
        self.submit(&candidate)
    }

    /// Advance the clock by one second
    ///
    /// Returns `None` once the game is over. Running out of time ends the
    /// game.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.is_over() {
            return None;
        }

        let tick = self.countdown.tick();
        if tick == Tick::Expired {
            self.finish(GameOverReason::TimeUp);
        }
        Some(tick)
    }

    /// Throw away all progress and start again from round one
    pub fn restart(&mut self) {
        self.total_score = 0;
        self.rounds_played = 0;
        self.summaries.clear();
        self.state = SessionState::Playing;
        self.start_round();
    }

    fn advance_round(&mut self) {
        self.summaries.push(RoundSummary::from_round(&self.round));

        if self.rounds_played < self.config.rounds {
            self.start_round();
        } else {
            self.end(GameOverReason::AllRoundsCleared);
        }
    }

    fn start_round(&mut self) {
        let previous = self.round.base_word().to_string();
        let base_word = pick_start_word(&self.start_words, Some(previous.as_str()), &mut self.rng)
            .map_or(previous, str::to_string);

        self.round = Round::shuffled(
            &base_word,
            &self.dictionary,
            self.config.min_word_length,
            &mut self.rng,
        );
        self.rounds_played += 1;
        self.countdown.reset(self.config.round_duration);

        info!(
            "round {} started with {} ({} possible words)",
            self.rounds_played,
            self.round.base_word(),
            self.round.possible().len()
        );
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.summaries.push(RoundSummary::from_round(&self.round));
        self.end(reason);
    }

    fn end(&mut self, reason: GameOverReason) {
        self.state = SessionState::GameOver(reason);
        info!(
            "game over ({reason:?}) after {} rounds with {} points",
            self.rounds_played, self.total_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Outcome;
    use crate::wordlists::START_WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(config: GameConfig, start_words: &[&str]) -> Session<StdRng> {
        Session::new(
            config,
            Dictionary::embedded(),
            words_from_slice(start_words),
            StdRng::seed_from_u64(42),
        )
        .unwrap()
    }

    fn clear_round(session: &mut Session<StdRng>) -> Validation {
        let words: Vec<String> = session
            .round()
            .missing()
            .iter()
            .map(|w| (*w).to_string())
            .collect();

        let mut last = None;
        for word in &words {
            last = session.submit(word);
        }
        last.unwrap()
    }

    #[test]
    fn pick_start_word_avoids_previous() {
        let words = words_from_slice(&["ORANGE", "PLANET"]);
        let mut rng = StdRng::seed_from_u64(1);

        // Eleven consecutive ORANGE draws are possible but vanishingly rare
        let repeats = (0..200)
            .filter(|_| pick_start_word(&words, Some("ORANGE"), &mut rng) == Some("ORANGE"))
            .count();
        assert!(repeats < 5, "previous word picked {repeats} times");
    }

    #[test]
    fn pick_start_word_single_and_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let single = words_from_slice(&["ORANGE"]);
        assert_eq!(pick_start_word(&single, Some("ORANGE"), &mut rng), Some("ORANGE"));
        assert_eq!(pick_start_word(&[], None, &mut rng), None);
    }

    #[test]
    fn new_session_starts_first_round() {
        let session = session(GameConfig::default(), START_WORDS);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.countdown().remaining(), 60);
        assert!(START_WORDS.contains(&session.round().base_word()));
        assert!(!session.round().possible().is_empty());
    }

    #[test]
    fn new_session_errors() {
        let no_words = Session::new(
            GameConfig::default(),
            Dictionary::embedded(),
            Vec::new(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(no_words, Err(GameError::NoStartWords)));

        let bad_config = Session::new(
            GameConfig {
                rounds: 0,
                ..GameConfig::default()
            },
            Dictionary::embedded(),
            words_from_slice(START_WORDS),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(bad_config, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn submissions_add_to_total() {
        let mut session = session(GameConfig::default(), &["ORANGE"]);

        let accepted = session.submit("range").unwrap();
        assert_eq!(accepted.outcome, Outcome::Accepted);
        let repeated = session.submit("RANGE").unwrap();
        assert_eq!(repeated.outcome, Outcome::AlreadyFound);

        assert_eq!(session.total_score(), 400);
        assert_eq!(session.round().score(), 400);
    }

    #[test]
    fn time_up_ends_game() {
        let config = GameConfig {
            round_duration: 3,
            clock_warning: 1,
            ..GameConfig::default()
        };
        let mut session = session(config, &["POCKET"]);
        session.submit("POCKET");

        assert_eq!(session.tick(), Some(Tick::Running(2)));
        assert_eq!(session.tick(), Some(Tick::Warning(1)));
        assert_eq!(session.tick(), Some(Tick::Expired));
        assert_eq!(session.state(), SessionState::GameOver(GameOverReason::TimeUp));
        assert_eq!(session.tick(), None);
        assert_eq!(session.submit("POET"), None);

        let summary = &session.summaries()[0];
        assert_eq!(summary.base_word, "POCKET");
        assert_eq!(summary.found, vec!["POCKET"]);
        assert_eq!(summary.missing.len(), 18);
        assert_eq!(summary.score, 600);
    }

    #[test]
    fn full_clear_on_last_round_ends_game() {
        let mut session = session(GameConfig::default(), &["POCKET"]);
        let last = clear_round(&mut session);

        assert!(last.round_complete);
        assert_eq!(
            session.state(),
            SessionState::GameOver(GameOverReason::AllRoundsCleared)
        );
        assert_eq!(session.total_score(), 4300);
        assert_eq!(session.summaries().len(), 1);
        assert!(session.summaries()[0].missing.is_empty());
    }

    #[test]
    fn full_clear_advances_round() {
        let config = GameConfig {
            rounds: 2,
            ..GameConfig::default()
        };
        let mut session = session(config, &["POCKET", "CAMERA"]);
        let first_word = session.round().base_word().to_string();

        // Burn some time so the reset is visible
        session.tick();
        session.tick();
        clear_round(&mut session);

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.rounds_played(), 2);
        assert_eq!(session.countdown().remaining(), 60);
        assert!(session.round().found().is_empty());
        assert_eq!(session.summaries().len(), 1);
        assert_eq!(session.summaries()[0].base_word, first_word);

        clear_round(&mut session);
        assert_eq!(
            session.state(),
            SessionState::GameOver(GameOverReason::AllRoundsCleared)
        );
        assert_eq!(session.summaries().len(), 2);
        let expected: u32 = session.summaries().iter().map(|s| s.score).sum();
        assert_eq!(session.total_score(), expected);
    }

    #[test]
    fn restart_resets_progress() {
        let config = GameConfig {
            round_duration: 1,
            clock_warning: 0,
            ..GameConfig::default()
        };
        let mut session = session(config, &["ORANGE"]);
        session.submit("ORANGE");
        session.tick();
        assert!(session.is_over());

        session.restart();
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.rounds_played(), 1);
        assert!(session.summaries().is_empty());
        assert!(session.round().found().is_empty());
        assert_eq!(session.countdown().remaining(), 1);
    }

    #[test]
    fn submit_indices_uses_tiles() {
        let mut session = session(GameConfig::default(), &["ORANGE"]);
        let letters = session.round().letters().to_vec();
        let indices: Vec<usize> = "ORANGE"
            .chars()
            .map(|c| letters.iter().position(|&l| l == c).unwrap())
            .collect();

        let validation = session.submit_indices(&indices).unwrap();
        assert_eq!(validation.word, "ORANGE");
        assert_eq!(validation.score_delta, 600);
    }
}
