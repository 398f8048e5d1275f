//! Spoken feedback templates.
//!
//! Every turn reply carries the same information: the pair just resolved,
//! the running score and the next English word to translate.

use crate::types::{GameSettings, WordPair};

/// Question asking for the translation of `word`.
pub fn ask(word: &WordPair, language: &str) -> String {
    format!("How do you say '{}' in {}?", word.english_word, language)
}

pub fn greeting(language: &str, first: &WordPair) -> String {
    format!(
        "Welcome to WordPan! We're going to practice your {language} vocabulary today. \
         I'll say an English word, and you tell me how to say it in {language}. \
         Are you ready? Let's get started! {}",
        ask(first, language)
    )
}

fn reveal(word: &WordPair, language: &str) -> String {
    format!(
        "'{}' in {} is '{}'.",
        word.english_word, language, word.translated_word
    )
}

fn score_line(score: u32, total: u32) -> String {
    format!("Your score is {score} out of {total}.")
}

/// Compliment for a correct answer, if the run deserves one.
pub fn praise(score: u32, total: u32, settings: &GameSettings) -> Option<String> {
    if score >= settings.hot_streak_at && score == total {
        Some(format!("You're on fire! {score} in a row!"))
    } else if score >= settings.streak_praise_at {
        Some("Great job!".to_string())
    } else {
        None
    }
}

pub fn correct(
    language: &str,
    answered: &WordPair,
    next: &WordPair,
    score: u32,
    total: u32,
    settings: &GameSettings,
) -> String {
    let mut parts = vec![
        "That's correct!".to_string(),
        reveal(answered, language),
    ];
    parts.extend(praise(score, total, settings));
    parts.push(score_line(score, total));
    parts.push(format!("Let's continue! {}", ask(next, language)));
    parts.join(" ")
}

pub fn incorrect(
    language: &str,
    answered: &WordPair,
    next: &WordPair,
    score: u32,
    total: u32,
) -> String {
    [
        "Not quite!".to_string(),
        reveal(answered, language),
        "Don't worry, you'll get it next time!".to_string(),
        score_line(score, total),
        format!("Let's try another one. {}", ask(next, language)),
    ]
    .join(" ")
}

pub fn skipped(
    language: &str,
    skipped: &WordPair,
    next: &WordPair,
    score: u32,
    total: u32,
) -> String {
    [
        "No problem, let's move on.".to_string(),
        reveal(skipped, language),
        score_line(score, total),
        ask(next, language),
    ]
    .join(" ")
}

pub fn farewell(score: u32, total: u32, accuracy: f64) -> String {
    if total == 0 {
        return "Thanks for playing WordPan! See you next time!".to_string();
    }
    format!(
        "Thanks for playing WordPan! You got {score} out of {total}, that's {accuracy:.0} percent. \
         See you next time!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cat() -> WordPair {
        WordPair::new("2", "cat", "gato", "Portuguese")
    }

    fn dog() -> WordPair {
        WordPair::new("1", "dog", "cachorro", "Portuguese")
    }

    #[test]
    fn greeting_names_language_and_first_word() {
        let text = greeting("Portuguese", &dog());
        assert!(text.contains("Portuguese"));
        assert!(text.ends_with("How do you say 'dog' in Portuguese?"));
    }

    #[test]
    fn correct_reply_states_pair_score_and_next_word() {
        let text = correct("Portuguese", &cat(), &dog(), 1, 1, &GameSettings::default());
        assert_eq!(
            text,
            "That's correct! 'cat' in Portuguese is 'gato'. Your score is 1 out of 1. \
             Let's continue! How do you say 'dog' in Portuguese?"
        );
    }

    #[test]
    fn incorrect_reply_reveals_translation() {
        let text = incorrect("Portuguese", &dog(), &cat(), 1, 2);
        assert!(text.contains("'dog' in Portuguese is 'cachorro'."));
        assert!(text.contains("Your score is 1 out of 2."));
        assert!(text.ends_with("How do you say 'cat' in Portuguese?"));
    }

    #[test]
    fn praise_escalates_on_perfect_run() {
        let settings = GameSettings::default();
        assert_eq!(praise(2, 2, &settings), None);
        assert_eq!(praise(3, 4, &settings).as_deref(), Some("Great job!"));
        assert_eq!(praise(4, 4, &settings).as_deref(), Some("Great job!"));
        assert_eq!(praise(5, 5, &settings).as_deref(), Some("You're on fire! 5 in a row!"));
        assert_eq!(praise(5, 6, &settings).as_deref(), Some("Great job!"));
    }

    #[test]
    fn skipped_reply_states_score() {
        let text = skipped("Portuguese", &cat(), &dog(), 0, 1);
        assert!(text.starts_with("No problem, let's move on."));
        assert!(text.contains("Your score is 0 out of 1."));
        assert!(text.ends_with("How do you say 'dog' in Portuguese?"));
    }

    #[test]
    fn farewell_reports_accuracy() {
        assert_eq!(
            farewell(3, 4, 75.0),
            "Thanks for playing WordPan! You got 3 out of 4, that's 75 percent. See you next time!"
        );
        assert_eq!(farewell(0, 0, 0.0), "Thanks for playing WordPan! See you next time!");
    }
}
