//! Environment configuration.

use std::str::FromStr;

use wordgame_core::{GameSettings, DEFAULT_LANGUAGE};

use crate::error::{AgentError, Result};

/// Supabase REST credentials.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

/// Session host configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// `None` when SUPABASE_URL or SUPABASE_KEY is missing.
    pub supabase: Option<SupabaseConfig>,
    pub language: String,
    pub settings: GameSettings,
}

impl AgentConfig {
    /// Read configuration from environment variables.
    ///
    /// Optional env vars:
    /// - SUPABASE_URL / SUPABASE_KEY: word source credentials
    /// - WORDGAME_LANGUAGE: starting language (default "Portuguese")
    /// - WORDGAME_WORD_LIMIT: pairs requested per load (default 100)
    /// - WORDGAME_SEED: fixed shuffle seed
    /// - WORDGAME_SIMILARITY: fuzzy match threshold in 0.0..=1.0 (default 0.7)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let supabase = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                key,
            }),
            _ => None,
        };

        let language =
            non_empty("WORDGAME_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let mut settings = GameSettings::default();
        if let Some(limit) = parse_var::<usize>(&non_empty, "WORDGAME_WORD_LIMIT")? {
            if limit == 0 {
                return Err(AgentError::config("WORDGAME_WORD_LIMIT", "must be at least 1"));
            }
            settings.word_limit = limit;
        }
        settings.shuffle_seed = parse_var::<u64>(&non_empty, "WORDGAME_SEED")?;
        if let Some(threshold) = parse_var::<f64>(&non_empty, "WORDGAME_SIMILARITY")? {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(AgentError::config(
                    "WORDGAME_SIMILARITY",
                    "must be between 0.0 and 1.0",
                ));
            }
            settings.similarity_threshold = threshold;
        }

        Ok(Self {
            supabase,
            language,
            settings,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AgentError::config(key, e.to_string()))
        })
        .transpose()
}
