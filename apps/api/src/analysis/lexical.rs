//! Lexical feature extraction: counts, readability, action verbs and quantified results.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{ContentAnalysis, QuantifiableResult, QuantityKind};
use crate::analysis::text::{context_snippet, whole_word_regex, word_count};

pub const WORDS_PER_PAGE: usize = 250;
pub const MAX_QUANTIFIABLE_RESULTS: usize = 10;
const QUANTITY_CONTEXT_CHARS: usize = 50;
/// Constant syllables-per-word assumption used by the reading-ease estimate.
const AVG_SYLLABLES_PER_WORD: f64 = 1.5;

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "delivered",
    "designed",
    "developed",
    "generated",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "optimized",
    "reduced",
    "spearheaded",
    "streamlined",
    "transformed",
];

static ACTION_VERB_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    ACTION_VERBS
        .iter()
        .map(|&verb| (verb, whole_word_regex(verb)))
        .collect()
});

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%").unwrap());
static CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:\d{1,3}(?:,\d{3})+|\d+)(?:\s*(?:million|thousand|billion|k|m)\b)?")
        .unwrap()
});

/// Builds the `ContentAnalysis` for a document. Pure; empty text gives zero counts
/// and a single page.
pub fn analyze_content(text: &str) -> ContentAnalysis {
    let word_count = word_count(text);
    let sentence_count = sentence_count(text);

    ContentAnalysis {
        word_count,
        character_count: text.chars().count(),
        page_count: page_count(word_count),
        sentence_count,
        readability_score: readability_score(word_count, sentence_count),
        action_verbs: find_action_verbs(text),
        quantifiable_results: find_quantifiable_results(text),
    }
}

pub fn sentence_count(text: &str) -> usize {
    SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn page_count(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_PAGE).max(1)
}

/// Average words per sentence; a text without sentence punctuation counts as one sentence.
pub fn average_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    word_count as f64 / sentence_count.max(1) as f64
}

/// 206.835 − 1.015·(words/sentences) − 84.6·1.5, rounded and clamped to 0 – 100.
pub fn readability_score(word_count: usize, sentence_count: usize) -> i32 {
    let avg = average_sentence_length(word_count, sentence_count);
    let score = 206.835 - 1.015 * avg - 84.6 * AVG_SYLLABLES_PER_WORD;
    score.round().clamp(0.0, 100.0) as i32
}

/// Vocabulary verbs present in the text, in vocabulary order.
pub fn find_action_verbs(text: &str) -> Vec<String> {
    ACTION_VERB_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(verb, _)| verb.to_string())
        .collect()
}

/// Percentages, then currency amounts, then bare/scaled numbers not already part
/// of one of the former. Capped at [`MAX_QUANTIFIABLE_RESULTS`].
pub fn find_quantifiable_results(text: &str) -> Vec<QuantifiableResult> {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut results = Vec::new();

    for (kind, re) in [
        (QuantityKind::Percentage, &*PERCENTAGE),
        (QuantityKind::Currency, &*CURRENCY),
    ] {
        for m in re.find_iter(text) {
            claimed.push((m.start(), m.end()));
            results.push(quantity(text, kind, m.start(), m.end()));
        }
    }

    for m in NUMBER.find_iter(text) {
        let overlaps = claimed
            .iter()
            .any(|&(start, end)| m.start() < end && start < m.end());
        if !overlaps {
            results.push(quantity(text, QuantityKind::Number, m.start(), m.end()));
        }
    }

    results.truncate(MAX_QUANTIFIABLE_RESULTS);
    results
}

fn quantity(text: &str, kind: QuantityKind, start: usize, end: usize) -> QuantifiableResult {
    QuantifiableResult {
        value: text[start..end].to_string(),
        kind,
        context: context_snippet(text, start, end, QUANTITY_CONTEXT_CHARS),
    }
}
