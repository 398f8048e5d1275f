//! Answer matching for spoken translations.
//!
//! Answers arrive from speech transcription, so matching is tolerant: extra
//! leading words, articles and small spelling drift are accepted. Tiers are
//! tried in a fixed order and the first one that accepts wins.

use crate::normalize::{fold_diacritics, normalize, strip_filler};
use crate::types::GameSettings;
use serde::{Deserialize, Serialize};

/// Articles tried in front of (or after the first token of) the correct answer.
pub const ARTICLES: &[&str] = &[
    "el", "la", "le", "les", "il", "lo", "o", "a", "os", "as", "los", "las", "un", "una", "der",
    "die", "das", "the", "l'",
];

/// Which rule accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    FillerStripped,
    Suffix,
    Phrase,
    Article,
    Similarity,
}

/// Thresholds for the fuzzy tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    pub similarity_threshold: f64,
    /// Strings of at most this many characters only match exactly.
    pub min_fuzzy_len: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            min_fuzzy_len: 3,
        }
    }
}

impl From<&GameSettings> for MatchPolicy {
    fn from(settings: &GameSettings) -> Self {
        Self {
            similarity_threshold: settings.similarity_threshold,
            min_fuzzy_len: settings.min_fuzzy_len,
        }
    }
}

/// Result of comparing a spoken answer to the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The tier that accepted the answer, if any.
    pub tier: Option<MatchTier>,
    /// Similarity of the diacritic-folded forms, when the fuzzy tier ran.
    pub similarity: Option<f64>,
    /// Normalized user answer (for logging).
    pub user_normalized: String,
    /// Normalized correct answer (for logging).
    pub correct_normalized: String,
}

/// Normalize both sides and run every tier.
pub fn compare_answers(user: &str, correct: &str, policy: &MatchPolicy) -> MatchResult {
    let user_normalized = normalize(user);
    let correct_normalized = normalize(correct);

    let (tier, similarity) = evaluate(&user_normalized, &correct_normalized, policy);

    MatchResult {
        is_correct: tier.is_some(),
        tier,
        similarity,
        user_normalized,
        correct_normalized,
    }
}

/// Decide correctness of pre-normalized answers with the default policy.
pub fn is_correct(user_answer: &str, correct_answer: &str) -> bool {
    match_tier(user_answer, correct_answer, &MatchPolicy::default()).is_some()
}

/// Return the first tier accepting `user` for `correct`.
///
/// Both arguments must already be normalized (lowercase, trimmed).
pub fn match_tier(user: &str, correct: &str, policy: &MatchPolicy) -> Option<MatchTier> {
    evaluate(user, correct, policy).0
}

/// Run the tiers, also returning the similarity if the fuzzy tier computed one.
fn evaluate(user: &str, correct: &str, policy: &MatchPolicy) -> (Option<MatchTier>, Option<f64>) {
    if user == correct {
        return (Some(MatchTier::Exact), None);
    }

    let stripped = strip_filler(user);
    if stripped == correct {
        return (Some(MatchTier::FillerStripped), None);
    }

    let correct_tokens: Vec<&str> = correct.split_whitespace().collect();

    if correct_tokens.len() == 1 && stripped.ends_with(correct) {
        return (Some(MatchTier::Suffix), None);
    }

    if correct_tokens.len() >= 2 {
        let user_tokens: Vec<&str> = user.split_whitespace().collect();
        if user_tokens
            .windows(correct_tokens.len())
            .any(|window| window == correct_tokens.as_slice())
        {
            return (Some(MatchTier::Phrase), None);
        }
    }

    if let Some((first, rest)) = correct_tokens.split_first() {
        let accepted = ARTICLES.iter().any(|article| {
            user == with_article(article, correct)
                || user == with_inner_article(article, first, rest)
        });
        if accepted {
            return (Some(MatchTier::Article), None);
        }
    }

    // Short words tolerate no edits: "to" and "go" must not match.
    let user_len = user.chars().count();
    let correct_len = correct.chars().count();
    if user_len <= policy.min_fuzzy_len || correct_len <= policy.min_fuzzy_len {
        return (None, None);
    }

    let similarity = normalized_similarity(&fold_diacritics(user), &fold_diacritics(correct));
    let tier = (similarity >= policy.similarity_threshold).then_some(MatchTier::Similarity);
    (tier, Some(similarity))
}

fn with_article(article: &str, answer: &str) -> String {
    if article.ends_with('\'') {
        format!("{article}{answer}")
    } else {
        format!("{article} {answer}")
    }
}

fn with_inner_article(article: &str, first: &str, rest: &[&str]) -> String {
    let mut tokens = Vec::with_capacity(rest.len() + 2);
    tokens.push(first);
    tokens.push(article);
    tokens.extend_from_slice(rest);
    tokens.join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
///
/// Lengths are counted in characters, so accented letters weigh the same as
/// plain ones.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
