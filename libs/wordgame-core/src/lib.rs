//! Answer-evaluation and session-state engine for the spoken word game.
//!
//! Provides:
//! - Text normalization (filler stripping, diacritic folding)
//! - Tiered answer matching (exact, filler, phrase, article, Levenshtein)
//! - A circular, shuffleable word pool with built-in fallback vocabulary
//! - The game state machine and its spoken feedback templates

pub mod error;
pub mod fallback;
pub mod feedback;
pub mod game;
pub mod matching;
pub mod normalize;
pub mod pool;
pub mod source;
pub mod types;

pub use error::{Result, SourceError};
pub use fallback::{canonical_language, fallback_words, synthetic_pair};
pub use game::{Game, Turn, TurnOutcome};
pub use matching::{
    compare_answers, is_correct, levenshtein_distance, match_tier, normalized_similarity,
    MatchPolicy, MatchResult, MatchTier,
};
pub use normalize::{fold_diacritics, normalize, strip_filler};
pub use pool::WordPool;
pub use source::{StaticWordSource, WordSource};
pub use types::{
    AttemptOutcome, AttemptRecord, GameEvent, GamePhase, GameSettings, GameState, WordPair,
    DEFAULT_LANGUAGE,
};
