//! Frequency-ranked theme terms from report text
//!
//! Titles and findings are lowercased and stripped to `[a-z]` and whitespace
//! before splitting, so digits and punctuation disappear and hyphenated terms
//! are fused ("micro-gravity" becomes "microgravity"). Short tokens and stop
//! words are dropped; the rest are weighted by `10 + sqrt(frequency) * 6`.
//!
//! Whitespace is the ECMAScript `\s` class, not `char::is_whitespace`: U+FEFF
//! separates tokens and U+0085 is stripped like any other non-letter.

use crate::analytics::count_first_seen;
use crate::config::ThemeConfig;
use crate::schema::ReportItem;
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_THEME_LIMIT: usize = 75;

/// Tokens of this many characters or fewer are discarded
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
    // domain-generic research vocabulary
    "cell", "cells", "effect", "effects", "study", "studies", "found", "showed", "analysis",
    "data", "results", "using", "response", "changes",
];

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeTerm {
    pub text: String,
    pub frequency: usize,
    pub weight: f64,
}

/// Display weight for a token seen `frequency` times
pub fn theme_weight(frequency: usize) -> f64 {
    10.0 + (frequency as f64).sqrt() * 6.0
}

/// Extract themes with the default settings
pub fn extract_themes(items: &[ReportItem]) -> Vec<ThemeTerm> {
    ThemeExtractor::new().extract(items)
}

#[derive(Debug, Clone)]
pub struct ThemeExtractor {
    stop_words: HashSet<String>,
    min_token_len: usize,
    limit: usize,
}

impl Default for ThemeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            limit: DEFAULT_THEME_LIMIT,
        }
    }

    /// Build an extractor from config; extra stop words add to the built-in set
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut extractor = Self::new();
        extractor.min_token_len = config.min_token_len;
        extractor.limit = config.limit;
        extractor
            .stop_words
            .extend(config.extra_stop_words.iter().map(|w| w.to_lowercase()));
        extractor
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Ranked terms, heaviest first, at most `limit` of them. Equal weights
    /// keep the order in which the tokens first appeared.
    pub fn extract(&self, items: &[ReportItem]) -> Vec<ThemeTerm> {
        let texts: Vec<String> = items
            .iter()
            .flat_map(|item| [clean(&item.title), clean(&item.main_findings)])
            .collect();
        let tokens = texts
            .iter()
            .flat_map(|text| text.split(is_separator))
            .filter(|token| !token.is_empty())
            .filter(|token| token.len() > self.min_token_len && !self.is_stop_word(token));

        let mut terms: Vec<ThemeTerm> = count_first_seen(tokens)
            .into_iter()
            .map(|(text, frequency)| ThemeTerm {
                text: text.to_string(),
                frequency,
                weight: theme_weight(frequency),
            })
            .collect();
        // weight is monotonic in frequency; stable sort keeps first-seen ties
        terms.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        terms.truncate(self.limit);

        tracing::debug!(items = items.len(), terms = terms.len(), "extracted themes");
        terms
    }
}

/// Lowercase and keep only ASCII letters and whitespace
fn clean(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || is_separator(c))
        .collect()
}

/// ECMAScript `\s`: `WhiteSpace` plus `LineTerminator`
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
