//! Keyword extraction.
//!
//! Two separate paths with different consumers:
//! - [`extract_categorized_keywords`] matches the fixed taxonomy plus a frequency-ranked
//!   `general` bucket. Job matching runs it on both the résumé and the job description.
//! - [`extract_keywords`] is a flat frequency count with a skill/general tag. It feeds
//!   the résumé's own keyword list.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::models::{ExtractedKeyword, KeywordClass};
use crate::analysis::text::{context_snippet, whole_word_regex};

pub const MAX_GENERAL_KEYWORDS: usize = 20;
pub const MAX_EXTRACTED_KEYWORDS: usize = 20;
const MAX_KEYWORD_CONTEXTS: usize = 3;
const KEYWORD_CONTEXT_CHARS: usize = 30;

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Keyword categories. Declaration order is the iteration order of
/// [`CategorizedKeywords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Technologies,
    Frameworks,
    Tools,
    Cloud,
    Methodologies,
    SoftSkills,
    ExperienceLevels,
    General,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Technologies => "technologies",
            KeywordCategory::Frameworks => "frameworks",
            KeywordCategory::Tools => "tools",
            KeywordCategory::Cloud => "cloud",
            KeywordCategory::Methodologies => "methodologies",
            KeywordCategory::SoftSkills => "soft_skills",
            KeywordCategory::ExperienceLevels => "experience_levels",
            KeywordCategory::General => "general",
        }
    }
}

pub const TAXONOMY: &[(KeywordCategory, &[&str])] = &[
    (
        KeywordCategory::Technologies,
        &[
            "javascript", "typescript", "python", "java", "c++", "c#", "go", "rust", "ruby",
            "php", "swift", "kotlin", "scala", "sql", "html", "css", "graphql", "node.js",
        ],
    ),
    (
        KeywordCategory::Frameworks,
        &[
            "react", "angular", "vue", "next.js", "express", "django", "flask", "spring",
            "rails", "laravel", ".net", "svelte", "tensorflow", "pytorch",
        ],
    ),
    (
        KeywordCategory::Tools,
        &[
            "git", "docker", "kubernetes", "jenkins", "terraform", "ansible", "jira",
            "webpack", "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "kafka",
        ],
    ),
    (
        KeywordCategory::Cloud,
        &[
            "aws", "azure", "gcp", "google cloud", "heroku", "lambda", "s3", "ec2",
            "cloudformation", "serverless",
        ],
    ),
    (
        KeywordCategory::Methodologies,
        &[
            "agile", "scrum", "kanban", "devops", "ci/cd", "tdd", "microservices", "rest",
            "waterfall", "lean",
        ],
    ),
    (
        KeywordCategory::SoftSkills,
        &[
            "leadership", "communication", "teamwork", "problem solving", "collaboration",
            "mentoring", "adaptability", "time management", "critical thinking",
            "stakeholder management",
        ],
    ),
    (
        KeywordCategory::ExperienceLevels,
        &[
            "junior", "mid-level", "senior", "lead", "principal", "staff", "entry level",
            "manager", "director", "architect",
        ],
    ),
];

pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her",
    "was", "one", "our", "out", "day", "get", "has", "him", "his", "how", "its", "may",
    "new", "now", "old", "see", "two", "who", "did", "she", "use", "way", "with", "this",
    "that", "from", "they", "will", "would", "there", "their", "what", "about", "which",
    "when", "make", "like", "time", "just", "know", "take", "into", "year", "your",
    "good", "some", "could", "them", "than", "then", "look", "only", "come", "over",
    "also", "back", "after", "work", "first", "well", "even", "want", "because", "these",
    "give", "most", "were", "been", "have", "more", "very", "such", "where", "other",
    "should", "must", "able", "within",
];

/// Vocabulary that tags a keyword from [`extract_keywords`] as a skill.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript", "python", "java", "react", "node", "sql", "aws", "docker", "kubernetes",
    "git", "typescript", "html", "css", "mongodb", "postgresql", "agile", "scrum",
    "leadership",
];

static TAXONOMY_PATTERNS: Lazy<Vec<(KeywordCategory, Vec<(&'static str, Regex)>)>> =
    Lazy::new(|| {
        TAXONOMY
            .iter()
            .map(|(category, words)| {
                let patterns = words.iter().map(|&w| (w, whole_word_regex(w))).collect();
                (*category, patterns)
            })
            .collect()
    });

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Categorized extraction (job matching)
// ────────────────────────────────────────────────────────────────────────────

/// Category → matched keywords. Only categories with at least one keyword are present.
/// Taxonomy categories keep declaration order; `general` is frequency-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedKeywords(BTreeMap<KeywordCategory, Vec<String>>);

impl CategorizedKeywords {
    pub fn get(&self, category: KeywordCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: KeywordCategory, keyword: &str) -> bool {
        self.get(category).iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeywordCategory, &[String])> {
        self.0.iter().map(|(c, words)| (*c, words.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn insert(&mut self, category: KeywordCategory, keywords: Vec<String>) {
        if keywords.is_empty() {
            self.0.remove(&category);
        } else {
            self.0.insert(category, keywords);
        }
    }
}

impl FromIterator<(KeywordCategory, Vec<String>)> for CategorizedKeywords {
    fn from_iter<I: IntoIterator<Item = (KeywordCategory, Vec<String>)>>(iter: I) -> Self {
        let mut keywords = CategorizedKeywords::default();
        for (category, words) in iter {
            keywords.insert(category, words);
        }
        keywords
    }
}

pub fn extract_categorized_keywords(text: &str) -> CategorizedKeywords {
    let lower = text.to_lowercase();
    let mut keywords: CategorizedKeywords = TAXONOMY_PATTERNS
        .iter()
        .map(|(category, patterns)| {
            let matched = patterns
                .iter()
                .filter(|(_, re)| re.is_match(&lower))
                .map(|(word, _)| word.to_string())
                .collect();
            (*category, matched)
        })
        .collect();

    let general = ranked_words(&lower)
        .into_iter()
        .take(MAX_GENERAL_KEYWORDS)
        .map(|(word, _)| word)
        .collect();
    keywords.insert(KeywordCategory::General, general);
    keywords
}

/// Lower-case ≥3-letter words minus stop words, by descending frequency. Ties keep
/// first-seen order.
fn ranked_words(lower: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for m in WORD.find_iter(lower) {
        let word = m.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|w| (w.to_string(), counts[w]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Flat extraction (résumé keyword list)
// ────────────────────────────────────────────────────────────────────────────

/// Top words of the résumé with frequency, skill tag, importance and a few
/// context snippets from the original text.
pub fn extract_keywords(text: &str) -> Vec<ExtractedKeyword> {
    let lower = text.to_lowercase();

    ranked_words(&lower)
        .into_iter()
        .take(MAX_EXTRACTED_KEYWORDS)
        .map(|(word, frequency)| {
            let category = if SKILL_VOCABULARY.contains(&word.as_str()) {
                KeywordClass::Skill
            } else {
                KeywordClass::General
            };
            let context = keyword_contexts(text, &word);
            ExtractedKeyword {
                importance: (frequency as f64 / 10.0).min(1.0),
                word,
                frequency,
                category,
                context,
            }
        })
        .collect()
}

fn keyword_contexts(text: &str, word: &str) -> Vec<String> {
    whole_word_regex(word)
        .find_iter(text)
        .take(MAX_KEYWORD_CONTEXTS)
        .map(|m| context_snippet(text, m.start(), m.end(), KEYWORD_CONTEXT_CHARS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Senior Software Engineer. We use React, TypeScript and Node.js on AWS. \
        Experience with Docker, Kubernetes and CI/CD is required. Agile team, strong communication.";

    #[test]
    fn test_taxonomy_matches_by_category() {
        let kw = extract_categorized_keywords(JOB);
        assert_eq!(kw.get(KeywordCategory::Technologies), ["typescript", "node.js"]);
        assert_eq!(kw.get(KeywordCategory::Frameworks), ["react"]);
        assert_eq!(kw.get(KeywordCategory::Tools), ["docker", "kubernetes"]);
        assert_eq!(kw.get(KeywordCategory::Cloud), ["aws"]);
        assert_eq!(kw.get(KeywordCategory::Methodologies), ["agile", "ci/cd"]);
        assert_eq!(kw.get(KeywordCategory::SoftSkills), ["communication"]);
        assert_eq!(kw.get(KeywordCategory::ExperienceLevels), ["senior"]);
    }

    #[test]
    fn test_empty_categories_are_absent() {
        let kw = extract_categorized_keywords("nothing relevant at all");
        assert!(kw.get(KeywordCategory::Technologies).is_empty());
        assert!(kw.iter().all(|(_, words)| !words.is_empty()));
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let kw = extract_categorized_keywords("JavaScript developer");
        assert_eq!(kw.get(KeywordCategory::Technologies), ["javascript"]);
    }

    #[test]
    fn test_general_is_frequency_sorted_without_stop_words() {
        let kw = extract_categorized_keywords(
            "platform platform platform billing billing with the and search",
        );
        assert_eq!(kw.get(KeywordCategory::General), ["platform", "billing", "search"]);
    }

    #[test]
    fn test_general_is_capped() {
        let text: String = (b'a'..=b'z')
            .map(|c| format!("word{} ", char::from(c)))
            .collect();
        let kw = extract_categorized_keywords(&text);
        assert_eq!(kw.get(KeywordCategory::General).len(), MAX_GENERAL_KEYWORDS);
    }

    #[test]
    fn test_extract_keywords_tags_skills() {
        let text = "Python python PYTHON services. Docker services.";
        let kws = extract_keywords(text);
        assert_eq!(kws[0].word, "python");
        assert_eq!(kws[0].frequency, 3);
        assert_eq!(kws[0].category, KeywordClass::Skill);
        assert!((kws[0].importance - 0.3).abs() < 1e-9);
        assert_eq!(kws[0].context.len(), 3);

        let services = kws.iter().find(|k| k.word == "services").unwrap();
        assert_eq!(services.category, KeywordClass::General);
        assert_eq!(services.frequency, 2);
    }

    #[test]
    fn test_extract_keywords_importance_saturates() {
        let text = "rust ".repeat(25);
        let kws = extract_keywords(&text);
        assert_eq!(kws[0].frequency, 25);
        assert_eq!(kws[0].importance, 1.0);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_categorized_keywords(JOB), extract_categorized_keywords(JOB));
        assert_eq!(extract_keywords(JOB), extract_keywords(JOB));
    }
}
