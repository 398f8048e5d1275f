//! Game state machine.
//!
//! A game is either inactive or awaiting an answer for its current word.
//! Answers and skips are only evaluated while awaiting an answer; in any
//! other phase they are no-ops and the caller is told to cede the turn.

use chrono::Utc;
use tracing::{debug, info};

use crate::fallback::canonical_language;
use crate::feedback;
use crate::matching::{compare_answers, MatchPolicy, MatchTier};
use crate::pool::WordPool;
use crate::source::WordSource;
use crate::types::{
    AttemptOutcome, AttemptRecord, GameEvent, GamePhase, GameSettings, GameState, WordPair,
    DEFAULT_LANGUAGE,
};

/// What a turn produced.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// No game is running; another handler should answer.
    Ceded,
    /// Nothing was said; produce no speech.
    Silent,
    /// The prompt was resolved.
    Reply(Turn),
}

impl TurnOutcome {
    /// Spoken text, if this outcome has any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            TurnOutcome::Reply(turn) => Some(&turn.reply),
            TurnOutcome::Ceded | TurnOutcome::Silent => None,
        }
    }
}

/// A resolved prompt and the reply composed for it.
#[derive(Debug, Clone)]
pub struct Turn {
    pub outcome: AttemptOutcome,
    /// Tier that accepted the answer, for correct answers.
    pub tier: Option<MatchTier>,
    /// The pair that was being asked.
    pub resolved: WordPair,
    /// The pair asked next.
    pub next: WordPair,
    pub reply: String,
    pub event: GameEvent,
}

impl Turn {
    pub fn is_correct(&self) -> bool {
        self.outcome == AttemptOutcome::Correct
    }
}

/// One session's game: state, word pool and settings.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    pool: WordPool,
    settings: GameSettings,
    loaded: bool,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_language(DEFAULT_LANGUAGE, settings)
    }

    /// Game for `language`; aliases such as "pt" resolve to their canonical name.
    pub fn with_language(language: impl AsRef<str>, settings: GameSettings) -> Self {
        let language = resolve_language(language.as_ref());
        Self {
            pool: WordPool::new(language.clone(), settings.shuffle_seed),
            state: GameState::new(language),
            settings,
            loaded: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Start a new game and return the greeting with the first prompt.
    ///
    /// The pool is reloaded on first start or when the language changes;
    /// `None` keeps the current language.
    pub async fn start(&mut self, source: &dyn WordSource, language: Option<&str>) -> String {
        let language = match language.map(str::trim).filter(|l| !l.is_empty()) {
            Some(requested) => resolve_language(requested),
            None => resolve_language(&self.state.target_language),
        };

        if !self.loaded || language != self.pool.language() {
            self.pool
                .load(source, &language, self.settings.word_limit)
                .await;
            self.loaded = true;
        }

        self.state.reset(language.as_str());
        self.pool.rewind();
        self.pool.shuffle();

        let first = self.advance();
        info!(language = %language, words = self.pool.len(), "Starting word game");

        feedback::greeting(&language, &first)
    }

    /// Evaluate a spoken answer for the current word.
    pub fn submit_answer(&mut self, text: &str) -> TurnOutcome {
        if self.phase() != GamePhase::AwaitingAnswer {
            debug!("Game not active, ceding turn");
            return TurnOutcome::Ceded;
        }

        if text.trim().is_empty() {
            info!("Empty user turn, ignoring");
            return TurnOutcome::Silent;
        }

        let Some(expected) = self.state.current_word.clone() else {
            return TurnOutcome::Ceded;
        };

        self.state.total_attempts += 1;
        let policy = MatchPolicy::from(&self.settings);
        let result = compare_answers(text, &expected.translated_word, &policy);
        if result.is_correct {
            self.state.score += 1;
        }

        let outcome = if result.is_correct {
            AttemptOutcome::Correct
        } else {
            AttemptOutcome::Incorrect
        };
        self.record(&expected, Some(text.trim().to_string()), outcome);

        let next = self.advance();
        let language = &self.state.target_language;
        let (score, total) = (self.state.score, self.state.total_attempts);

        let reply = if result.is_correct {
            info!(
                answer = %result.user_normalized,
                expected = %result.correct_normalized,
                tier = ?result.tier,
                "Correct answer"
            );
            feedback::correct(language, &expected, &next, score, total, &self.settings)
        } else {
            info!(
                answer = %result.user_normalized,
                expected = %result.correct_normalized,
                similarity = ?result.similarity,
                "Incorrect answer"
            );
            feedback::incorrect(language, &expected, &next, score, total)
        };

        TurnOutcome::Reply(Turn {
            outcome,
            tier: result.tier,
            resolved: expected,
            next,
            reply,
            event: self.state.score_update(),
        })
    }

    /// Give up on the current word and move on.
    pub fn skip(&mut self) -> TurnOutcome {
        if self.phase() != GamePhase::AwaitingAnswer {
            debug!("Game not active, ignoring skip");
            return TurnOutcome::Ceded;
        }

        let Some(skipped) = self.state.current_word.clone() else {
            return TurnOutcome::Ceded;
        };

        self.state.total_attempts += 1;
        self.record(&skipped, None, AttemptOutcome::Skipped);

        let next = self.advance();
        info!(word = %skipped.english_word, "Skipped word");

        let reply = feedback::skipped(
            &self.state.target_language,
            &skipped,
            &next,
            self.state.score,
            self.state.total_attempts,
        );

        TurnOutcome::Reply(Turn {
            outcome: AttemptOutcome::Skipped,
            tier: None,
            resolved: skipped,
            next,
            reply,
            event: self.state.score_update(),
        })
    }

    /// End the game and return the farewell. Safe to call repeatedly.
    pub fn stop(&mut self) -> String {
        if self.state.is_active {
            info!(
                score = self.state.score,
                total = self.state.total_attempts,
                "Stopping word game"
            );
        }
        self.state.is_active = false;

        feedback::farewell(
            self.state.score,
            self.state.total_attempts,
            self.state.accuracy(),
        )
    }

    fn advance(&mut self) -> WordPair {
        let next = self.pool.next_word();
        self.state.current_word = Some(next.clone());
        next
    }

    fn record(&mut self, word: &WordPair, answer: Option<String>, outcome: AttemptOutcome) {
        self.state.history.push(AttemptRecord {
            word: word.clone(),
            answer,
            outcome,
            at: Utc::now(),
        });
    }
}

/// Canonical name for a known language, otherwise the trimmed input.
fn resolve_language(language: &str) -> String {
    let language = language.trim();
    canonical_language(language)
        .map(str::to_string)
        .unwrap_or_else(|| language.to_string())
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
