//! Word source boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::fallback::fallback_words;
use crate::types::WordPair;

/// Supplies word pairs for a target language.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Source identifier used in logs.
    fn name(&self) -> &str;

    /// Fetch up to `limit` pairs for `language`.
    async fn fetch(&self, language: &str, limit: usize) -> Result<Vec<WordPair>>;
}

/// Word source backed by the built-in vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticWordSource;

#[async_trait]
impl WordSource for StaticWordSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, language: &str, limit: usize) -> Result<Vec<WordPair>> {
        let mut words = fallback_words(language);
        words.truncate(limit);
        Ok(words)
    }
}
