//! ATS compatibility scoring.
//!
//! Five independent sub-scores start at 100 and lose fixed points per detected issue;
//! every deduction is mirrored by an `AtsIssue`. Sub-scores are clamped into 0 – 100
//! and `overall` is their rounded mean.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::lexical::{average_sentence_length, sentence_count};
use crate::analysis::models::{AtsBreakdown, AtsCategory, AtsIssue, AtsScore, IssueSeverity};
use crate::analysis::text::{whole_word_regex, word_count};

const FULL_SCORE: i32 = 100;
pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 800;
pub const MIN_ACTION_VERBS: usize = 3;
pub const MAX_AVG_SENTENCE_WORDS: f64 = 25.0;

pub const ATS_ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "designed",
    "developed",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "reduced",
];

pub const GENERIC_IMPROVEMENTS: &[&str] = &[
    "Use standard section headings such as Experience, Education and Skills",
    "Avoid tables, text boxes and images that ATS parsers cannot read",
    "Mirror keywords from the job description where they honestly apply",
    "Save the résumé as a text-based PDF or DOCX rather than a scanned image",
];

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap()
});
static ATS_VERB_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| ATS_ACTION_VERBS.iter().map(|v| whole_word_regex(v)).collect());

/// A single fixed-point deduction rule outcome.
struct Deduction {
    category: AtsCategory,
    severity: IssueSeverity,
    points: i32,
    message: String,
    fix: &'static str,
}

pub fn score_ats(text: &str) -> AtsScore {
    let words = word_count(text);
    let mut deductions = Vec::new();

    deductions.extend(check_length(words));
    deductions.extend(check_structure(text));
    deductions.extend(check_keywords(text));
    deductions.extend(check_readability(words, sentence_count(text)));

    let mut formatting = FULL_SCORE;
    let mut length = FULL_SCORE;
    let mut structure = FULL_SCORE;
    let mut keywords = FULL_SCORE;
    let mut readability = FULL_SCORE;

    let mut issues = Vec::with_capacity(deductions.len());
    for d in deductions {
        let score = match d.category {
            AtsCategory::Length => &mut length,
            AtsCategory::Structure => &mut structure,
            AtsCategory::Keywords => &mut keywords,
            AtsCategory::Readability => &mut readability,
            AtsCategory::Formatting => &mut formatting,
        };
        *score -= d.points;
        issues.push(AtsIssue {
            severity: d.severity,
            category: d.category,
            message: d.message,
            impact: d.points as u32,
            fix: Some(d.fix.to_string()),
        });
    }

    let breakdown = AtsBreakdown {
        formatting: clamp_score(formatting),
        keywords: clamp_score(keywords),
        structure: clamp_score(structure),
        readability: clamp_score(readability),
        length: clamp_score(length),
    };

    AtsScore {
        overall: breakdown.mean_rounded(),
        breakdown,
        issues,
        improvements: GENERIC_IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
    }
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(0, FULL_SCORE) as u32
}

fn check_length(words: usize) -> Option<Deduction> {
    if words < MIN_WORDS {
        Some(Deduction {
            category: AtsCategory::Length,
            severity: IssueSeverity::Critical,
            points: 30,
            message: format!("Résumé is too short ({words} words); aim for at least {MIN_WORDS}"),
            fix: "Expand your experience with responsibilities, achievements and results",
        })
    } else if words > MAX_WORDS {
        Some(Deduction {
            category: AtsCategory::Length,
            severity: IssueSeverity::Warning,
            points: 15,
            message: format!("Résumé is too long ({words} words); aim for at most {MAX_WORDS}"),
            fix: "Trim older or less relevant roles and condense bullet points",
        })
    } else {
        None
    }
}

fn check_structure(text: &str) -> Vec<Deduction> {
    let mut deductions = Vec::new();
    if !EMAIL.is_match(text) {
        deductions.push(Deduction {
            category: AtsCategory::Structure,
            severity: IssueSeverity::Critical,
            points: 25,
            message: "No email address found".to_string(),
            fix: "Add a professional email address to your contact details",
        });
    }
    if !PHONE.is_match(text) {
        deductions.push(Deduction {
            category: AtsCategory::Structure,
            severity: IssueSeverity::Warning,
            points: 15,
            message: "No phone number found".to_string(),
            fix: "Add a phone number to your contact details",
        });
    }
    deductions
}

fn check_keywords(text: &str) -> Option<Deduction> {
    let found = ATS_VERB_PATTERNS.iter().filter(|re| re.is_match(text)).count();
    (found < MIN_ACTION_VERBS).then(|| Deduction {
        category: AtsCategory::Keywords,
        severity: IssueSeverity::Suggestion,
        points: 20,
        message: format!("Only {found} strong action verbs found"),
        fix: "Start bullet points with verbs like achieved, developed, led or managed",
    })
}

fn check_readability(words: usize, sentences: usize) -> Option<Deduction> {
    let avg = average_sentence_length(words, sentences);
    (avg > MAX_AVG_SENTENCE_WORDS).then(|| Deduction {
        category: AtsCategory::Readability,
        severity: IssueSeverity::Suggestion,
        points: 15,
        message: format!("Sentences average {avg:.1} words"),
        fix: "Break long sentences into concise bullet points",
    })
}
