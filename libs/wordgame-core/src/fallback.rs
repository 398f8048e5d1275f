//! Built-in vocabulary used when the word source is unavailable.

use crate::types::WordPair;

struct FallbackLanguage {
    name: &'static str,
    aliases: &'static [&'static str],
    hello: &'static str,
    words: &'static [(&'static str, &'static str)],
}

const LANGUAGES: &[FallbackLanguage] = &[
    FallbackLanguage {
        name: "Portuguese",
        aliases: &["portuguese", "pt", "pt-br", "pt-pt", "português"],
        hello: "olá",
        words: &[
            ("dog", "cachorro"),
            ("cat", "gato"),
            ("house", "casa"),
            ("water", "água"),
            ("hello", "olá"),
            ("goodbye", "adeus"),
            ("thank you", "obrigado"),
            ("please", "por favor"),
            ("yes", "sim"),
            ("no", "não"),
        ],
    },
    FallbackLanguage {
        name: "Spanish",
        aliases: &["spanish", "es", "español", "espanol"],
        hello: "hola",
        words: &[
            ("dog", "perro"),
            ("cat", "gato"),
            ("house", "casa"),
            ("water", "agua"),
            ("hello", "hola"),
        ],
    },
    FallbackLanguage {
        name: "Belarusian",
        aliases: &["belarusian", "be", "belarus"],
        hello: "прывітанне",
        words: &[
            ("dog", "сабака"),
            ("cat", "кот"),
            ("house", "дом"),
            ("water", "вада"),
            ("hello", "прывітанне"),
            ("goodbye", "да пабачэння"),
            ("thank you", "дзякуй"),
            ("please", "калі ласка"),
            ("yes", "так"),
            ("no", "не"),
            ("friend", "сябар"),
            ("love", "любоў"),
            ("book", "кніга"),
            ("sun", "сонца"),
            ("moon", "месяц"),
        ],
    },
    FallbackLanguage {
        name: "French",
        aliases: &["french", "fr", "français", "francais"],
        hello: "bonjour",
        words: &[
            ("dog", "chien"),
            ("cat", "chat"),
            ("house", "maison"),
            ("water", "eau"),
            ("hello", "bonjour"),
            ("thank you", "merci"),
        ],
    },
    FallbackLanguage {
        name: "Italian",
        aliases: &["italian", "it", "italiano"],
        hello: "ciao",
        words: &[
            ("dog", "cane"),
            ("cat", "gatto"),
            ("house", "casa"),
            ("water", "acqua"),
            ("hello", "ciao"),
            ("thank you", "grazie"),
        ],
    },
    FallbackLanguage {
        name: "German",
        aliases: &["german", "de", "deutsch"],
        hello: "hallo",
        words: &[
            ("dog", "hund"),
            ("cat", "katze"),
            ("house", "haus"),
            ("water", "wasser"),
            ("hello", "hallo"),
            ("thank you", "danke"),
        ],
    },
];

fn lookup(language: &str) -> Option<&'static FallbackLanguage> {
    let key = language.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.aliases.contains(&key.as_str()))
}

/// Display name for a language name or code ("pt" -> "Portuguese").
pub fn canonical_language(language: &str) -> Option<&'static str> {
    lookup(language).map(|lang| lang.name)
}

/// Built-in pairs for `language`; empty when the language is unknown.
pub fn fallback_words(language: &str) -> Vec<WordPair> {
    let Some(lang) = lookup(language) else {
        return Vec::new();
    };

    lang.words
        .iter()
        .enumerate()
        .map(|(idx, (english, translated))| {
            WordPair::new((idx + 1).to_string(), *english, *translated, lang.name)
        })
        .collect()
}

/// Pair offered when a pool has nothing else to give.
pub fn synthetic_pair(language: &str) -> WordPair {
    let translated = lookup(language).map(|lang| lang.hello).unwrap_or("hello");
    WordPair::new("fallback", "hello", translated, language.trim())
}
