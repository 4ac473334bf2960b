//! Date-prefixed friendly identifiers (`1999/11/10/ash-defeats-gary`).

use chrono::NaiveDate;

/// Default cap on the slug body, not counting the date prefix.
pub const DEFAULT_MAX_LENGTH: usize = 60;

/// Connector words that carry no identifying value in a slug.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "of", "on", "or",
    "the", "to", "with",
];

/// Body used when a title has no usable characters at all.
const FALLBACK_BODY: &str = "untitled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    pub max_length: usize,
    pub stop_words: Vec<String>,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl SlugConfig {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }
}

/// Build `YYYY/MM/DD/<body>` from a title and its publication date.
pub fn normalize(title: &str, published_on: NaiveDate, config: &SlugConfig) -> String {
    format!("{}/{}", published_on.format("%Y/%m/%d"), slug_body(title, config))
}

/// Lowercased, dash-joined significant words of `title`, capped at
/// `config.max_length` on a word boundary.
///
/// The result is never empty and never ends with a dash.
pub fn slug_body(title: &str, config: &SlugConfig) -> String {
    let words = words(title);
    let significant: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| !config.is_stop_word(w))
        .collect();

    // A title made only of stop words keeps all of them.
    let kept = if significant.is_empty() {
        words.iter().map(String::as_str).collect()
    } else {
        significant
    };

    let max_length = config.max_length.max(1);
    if kept.is_empty() {
        return join_within(&[FALLBACK_BODY], max_length);
    }
    join_within(&kept, max_length)
}

/// Whitespace, `-` and `_` separate words; anything else outside
/// `[a-z0-9]` is dropped after lowercasing.
fn words(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn join_within(words: &[&str], max_length: usize) -> String {
    let mut body = String::new();
    for word in words {
        let needed = if body.is_empty() {
            word.len()
        } else {
            word.len() + 1
        };
        if body.len() + needed > max_length {
            if body.is_empty() {
                // Words are ASCII, so any byte index is a char boundary.
                body.push_str(&word[..max_length]);
            }
            break;
        }
        if !body.is_empty() {
            body.push('-');
        }
        body.push_str(word);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 11, 10).unwrap()
    }

    #[test]
    fn test_prefixes_publication_date() {
        let slug = normalize("Ash defeats Gary in Indigo Plateau", date(), &SlugConfig::default());
        let pattern = Regex::new(r"^(\d{4})/(\d{2})/(\d{2})/([a-z_\d\-]+)$").unwrap();

        let caps = pattern.captures(&slug).unwrap();
        assert_eq!(&caps[1], "1999");
        assert_eq!(&caps[2], "11");
        assert_eq!(&caps[3], "10");
    }

    #[test]
    fn test_keeps_key_words_and_drops_connectors() {
        let slug = normalize("Ash defeats Gary in Indigo Plateau", date(), &SlugConfig::default());

        for word in ["ash", "defeats", "gary", "indigo", "plateau"] {
            assert!(slug.contains(word), "{slug} should contain {word}");
        }
        assert!(!slug.contains("-in-"));
        assert_eq!(slug, "1999/11/10/ash-defeats-gary-indigo-plateau");
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let body = slug_body("Pikachu Won't Enter His Poké Ball!", &SlugConfig::default());
        assert_eq!(body, "pikachu-wont-enter-his-pok-ball");
    }

    #[test]
    fn test_long_title_is_cut_on_a_word_boundary() {
        let title = format!("{}-{}", "a".repeat(49), "b".repeat(50));
        let config = SlugConfig::default().with_max_length(50);

        let body = slug_body(&title, &config);

        assert!(body.len() <= 50);
        assert!(!body.ends_with('-'));
        assert_eq!(body, "a".repeat(49));
    }

    #[test]
    fn test_single_oversized_word_is_hard_cut() {
        let config = SlugConfig::default().with_max_length(10);
        assert_eq!(slug_body(&"x".repeat(30), &config), "x".repeat(10));
    }

    #[test]
    fn test_never_ends_with_dash() {
        let config = SlugConfig::default().with_max_length(12);
        let body = slug_body("Gary loses badly again today", &config);
        assert_eq!(body, "gary-loses");
    }

    #[test]
    fn test_title_of_only_stop_words_is_kept() {
        assert_eq!(slug_body("In the", &SlugConfig::default()), "in-the");
    }

    #[test]
    fn test_title_without_usable_characters_falls_back() {
        assert_eq!(slug_body("!!! ???", &SlugConfig::default()), "untitled");
    }

    #[test]
    fn test_fallback_respects_max_length() {
        let config = SlugConfig::default().with_max_length(5);
        let body = slug_body("!!! ???", &config);

        assert!(body.len() <= 5);
        assert_eq!(body, "untit");
    }

    #[test]
    fn test_is_deterministic() {
        let config = SlugConfig::default().with_max_length(20);
        let title = "Team Rocket blasts off again";
        assert_eq!(
            normalize(title, date(), &config),
            normalize(title, date(), &config)
        );
    }
}
