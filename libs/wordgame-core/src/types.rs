//! Core types for the word game.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One English word and its accepted translation.
///
/// Pairs compare by `id` only: the same content may legitimately appear under
/// several ids (one per language), and the pool tracks its cursor by identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPair {
    pub id: String,
    pub english_word: String,
    pub translated_word: String,
    pub target_language: String,
}

impl WordPair {
    pub fn new(
        id: impl Into<String>,
        english_word: impl Into<String>,
        translated_word: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            english_word: english_word.into(),
            translated_word: translated_word.into(),
            target_language: target_language.into(),
        }
    }
}

impl PartialEq for WordPair {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WordPair {}

/// Coarse game phase derived from [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Inactive,
    AwaitingAnswer,
}

/// How a single prompt was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Correct,
    Incorrect,
    Skipped,
}

/// One entry of the per-game word history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub word: WordPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub outcome: AttemptOutcome,
    pub at: DateTime<Utc>,
}

/// Event pushed to score observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ScoreUpdate { score: u32, total: u32 },
}

/// Mutable state of one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub is_active: bool,
    pub target_language: String,
    pub score: u32,
    pub total_attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_word: Option<WordPair>,
    pub history: Vec<AttemptRecord>,
}

impl GameState {
    /// Inactive state for `target_language`.
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            is_active: false,
            target_language: target_language.into(),
            score: 0,
            total_attempts: 0,
            current_word: None,
            history: Vec::new(),
        }
    }

    /// Reset for a new game and mark it active.
    pub fn reset(&mut self, target_language: impl Into<String>) {
        self.is_active = true;
        self.target_language = target_language.into();
        self.score = 0;
        self.total_attempts = 0;
        self.current_word = None;
        self.history.clear();
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_active && self.current_word.is_some() {
            GamePhase::AwaitingAnswer
        } else {
            GamePhase::Inactive
        }
    }

    /// Accuracy as a percentage (0-100).
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total_attempts) * 100.0
    }

    pub fn score_update(&self) -> GameEvent {
        GameEvent::ScoreUpdate {
            score: self.score,
            total: self.total_attempts,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

/// Language used when nothing else is requested.
pub const DEFAULT_LANGUAGE: &str = "Portuguese";

/// Tunable game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Maximum number of pairs requested from the word source.
    pub word_limit: usize,
    /// Minimum edit-distance similarity accepted as correct.
    pub similarity_threshold: f64,
    /// Answers this short (in characters) must match exactly.
    pub min_fuzzy_len: usize,
    /// Score from which correct answers earn a compliment.
    pub streak_praise_at: u32,
    /// Perfect-run length that earns the escalated compliment.
    pub hot_streak_at: u32,
    /// Fixed shuffle seed; `None` draws one from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            word_limit: 100,
            similarity_threshold: 0.7,
            min_fuzzy_len: 3,
            streak_praise_at: 3,
            hot_streak_at: 5,
            shuffle_seed: None,
        }
    }
}
