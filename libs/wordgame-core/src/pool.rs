//! Shuffleable, circular pool of word pairs for one language.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::fallback::{fallback_words, synthetic_pair};
use crate::source::WordSource;
use crate::types::WordPair;

/// Ordered word pairs plus the pair currently being asked.
///
/// The cursor is tracked by pair identity, so shuffling keeps the current
/// pair current and `next_word` continues from its new position.
#[derive(Debug, Clone)]
pub struct WordPool {
    language: String,
    pairs: Vec<WordPair>,
    current: Option<WordPair>,
    rng: ChaCha8Rng,
}

impl WordPool {
    /// Empty pool; `seed` fixes the shuffle order.
    pub fn new(language: impl Into<String>, seed: Option<u64>) -> Self {
        Self::with_pairs(language, Vec::new(), seed)
    }

    pub fn with_pairs(
        language: impl Into<String>,
        pairs: Vec<WordPair>,
        seed: Option<u64>,
    ) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
        Self {
            language: language.into(),
            pairs,
            current: None,
            rng,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn current(&self) -> Option<&WordPair> {
        self.current.as_ref()
    }

    /// Replace the pool with up to `limit` pairs for `language`.
    ///
    /// Source failures and empty results fall back to the built-in list; an
    /// unknown language leaves the pool empty. Never fails.
    pub async fn load(
        &mut self,
        source: &dyn WordSource,
        language: &str,
        limit: usize,
    ) -> &[WordPair] {
        let pairs = match source.fetch(language, limit).await {
            Ok(pairs) if !pairs.is_empty() => {
                info!(
                    source = source.name(),
                    language,
                    count = pairs.len(),
                    "Loaded word pairs"
                );
                pairs
            }
            Ok(_) => {
                warn!(
                    source = source.name(),
                    language,
                    "Word source returned no pairs, using fallback words"
                );
                Self::fallback(language, limit)
            }
            Err(e) => {
                warn!(
                    source = source.name(),
                    language,
                    error = %e,
                    "Word source unavailable, using fallback words"
                );
                Self::fallback(language, limit)
            }
        };

        self.language = language.to_string();
        self.pairs = pairs;
        self.current = None;
        &self.pairs
    }

    fn fallback(language: &str, limit: usize) -> Vec<WordPair> {
        let mut pairs = fallback_words(language);
        if pairs.is_empty() {
            warn!(language, "No fallback words available");
        }
        pairs.truncate(limit.max(1));
        pairs
    }

    /// Forget the current pair so the next call starts from index 0.
    pub fn rewind(&mut self) {
        self.current = None;
    }

    /// Uniformly permute the pairs. The current pair stays current.
    pub fn shuffle(&mut self) {
        self.pairs.shuffle(&mut self.rng);
    }

    /// Advance circularly and return the new current pair.
    ///
    /// Starts at index 0 when nothing is current. An empty pool yields the
    /// synthetic "hello" pair and leaves the cursor untouched.
    pub fn next_word(&mut self) -> WordPair {
        if self.pairs.is_empty() {
            warn!(language = %self.language, "No word pairs available, using synthetic pair");
            return synthetic_pair(&self.language);
        }

        let position = self
            .current
            .as_ref()
            .and_then(|current| self.pairs.iter().position(|pair| pair == current));
        let next_idx = match position {
            Some(idx) => (idx + 1) % self.pairs.len(),
            None => 0,
        };

        let pair = self.pairs[next_idx].clone();
        self.current = Some(pair.clone());
        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SourceError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct FixedSource(Vec<WordPair>);

    #[async_trait]
    impl WordSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self, _language: &str, limit: usize) -> Result<Vec<WordPair>> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl WordSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self, _language: &str, _limit: usize) -> Result<Vec<WordPair>> {
            Err(SourceError::Request("connection refused".to_string()))
        }
    }

    fn pairs(n: usize) -> Vec<WordPair> {
        (0..n)
            .map(|i| WordPair::new(i.to_string(), format!("en{i}"), format!("tr{i}"), "Test"))
            .collect()
    }

    #[test]
    fn next_word_visits_every_pair_then_wraps() {
        for n in 1..=6 {
            let mut pool = WordPool::with_pairs("Test", pairs(n), Some(7));
            let first = pool.next_word();
            let mut seen = vec![first.id.clone()];
            for _ in 1..n {
                seen.push(pool.next_word().id);
            }
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), n);
            assert_eq!(pool.next_word(), first);
        }
    }

    #[test]
    fn next_word_starts_at_index_zero() {
        let mut pool = WordPool::with_pairs("Test", pairs(3), Some(1));
        assert!(pool.current().is_none());
        assert_eq!(pool.next_word().id, "0");
        assert_eq!(pool.current().map(|p| p.id.as_str()), Some("0"));
    }

    #[test]
    fn empty_pool_yields_synthetic_pair_without_moving() {
        let mut pool = WordPool::new("Portuguese", Some(1));
        let pair = pool.next_word();
        assert_eq!(pair.id, "fallback");
        assert_eq!(pair.english_word, "hello");
        assert_eq!(pair.translated_word, "olá");
        assert!(pool.current().is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut pool = WordPool::with_pairs("Test", pairs(20), Some(42));
        pool.shuffle();
        let mut ids: Vec<usize> = pool.pairs().iter().map(|p| p.id.parse().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_reproducible_with_seed() {
        let mut a = WordPool::with_pairs("Test", pairs(10), Some(9));
        let mut b = WordPool::with_pairs("Test", pairs(10), Some(9));
        a.shuffle();
        b.shuffle();
        let ids = |pool: &WordPool| pool.pairs().iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn shuffle_keeps_current_pair() {
        let mut pool = WordPool::with_pairs("Test", pairs(8), Some(3));
        let current = pool.next_word();
        pool.shuffle();
        assert_eq!(pool.current(), Some(&current));

        let idx = pool.pairs().iter().position(|p| *p == current).unwrap();
        let expected = pool.pairs()[(idx + 1) % 8].clone();
        assert_eq!(pool.next_word(), expected);
    }

    #[tokio::test]
    async fn load_uses_source_pairs() {
        let source = FixedSource(pairs(4));
        let mut pool = WordPool::new("Test", Some(1));
        let loaded = pool.load(&source, "Test", 3).await;
        assert_eq!(loaded.len(), 3);
        assert_eq!(pool.language(), "Test");
    }

    #[tokio::test]
    async fn load_falls_back_on_failure() {
        let mut pool = WordPool::new("Spanish", Some(1));
        let loaded = pool.load(&FailingSource, "es", 100).await;
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded[0].translated_word, "perro");
    }

    #[tokio::test]
    async fn load_falls_back_on_empty_result() {
        let mut pool = WordPool::new("Portuguese", Some(1));
        let loaded = pool.load(&FixedSource(Vec::new()), "Portuguese", 100).await;
        assert_eq!(loaded.len(), 10);
    }

    #[tokio::test]
    async fn load_unknown_language_leaves_pool_empty() {
        let mut pool = WordPool::new("Klingon", Some(1));
        let loaded = pool.load(&FailingSource, "Klingon", 100).await;
        assert!(loaded.is_empty());
        assert_eq!(pool.next_word().id, "fallback");
    }

    #[tokio::test]
    async fn load_resets_cursor() {
        let mut pool = WordPool::with_pairs("Test", pairs(3), Some(1));
        pool.next_word();
        pool.next_word();
        pool.load(&FixedSource(pairs(3)), "Test", 10).await;
        assert!(pool.current().is_none());
        assert_eq!(pool.next_word().id, "0");
    }
}
