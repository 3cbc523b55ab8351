//! Keyword matching and the weighted match score.

use std::collections::HashSet;

use crate::analysis::keywords::{CategorizedKeywords, KeywordCategory};
use crate::analysis::text::{whole_word_regex, word_count};
use crate::job_match::models::{KeywordFrequency, KeywordMatch};
use crate::job_match::tables::{category_weight, RESUME_ONLY_WEIGHT};

const QUALITY_BASELINE: f64 = 50.0;
const QUALITY_FACTOR: f64 = 0.2;
const LENGTH_BONUS_MAX: f64 = 5.0;
const MIN_EXPECTED_RESUME_WORDS: f64 = 200.0;

/// Matches every job keyword against the résumé's keywords in the same category,
/// and records résumé keywords the job does not mention. First occurrence of a
/// keyword wins; the result is sorted by descending importance.
///
/// `general` keywords are only the top-ranked words of each text, so membership in
/// that category is decided by a whole-word search of the other text instead.
pub fn build_keyword_matches(
    resume_keywords: &CategorizedKeywords,
    job_keywords: &CategorizedKeywords,
    resume_text: &str,
    job_text: &str,
) -> Vec<KeywordMatch> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matches = Vec::new();

    for (category, job_words) in job_keywords.iter() {
        let weight = category_weight(category);

        for keyword in job_words {
            if seen.insert(keyword.as_str()) {
                let frequency = frequency(keyword, resume_text, job_text);
                let in_resume = match category {
                    KeywordCategory::General => frequency.resume > 0,
                    _ => resume_keywords.contains(category, keyword),
                };
                matches.push(KeywordMatch {
                    keyword: keyword.clone(),
                    in_resume,
                    in_job: true,
                    frequency,
                    importance: weight,
                    category,
                });
            }
        }

        for keyword in resume_keywords.get(category) {
            if job_keywords.contains(category, keyword) {
                continue;
            }
            let frequency = frequency(keyword, resume_text, job_text);
            if category == KeywordCategory::General && frequency.job > 0 {
                continue;
            }
            if seen.insert(keyword.as_str()) {
                matches.push(KeywordMatch {
                    keyword: keyword.clone(),
                    in_resume: true,
                    in_job: false,
                    frequency,
                    importance: RESUME_ONLY_WEIGHT,
                    category,
                });
            }
        }
    }

    matches.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    matches
}

fn frequency(keyword: &str, resume_text: &str, job_text: &str) -> KeywordFrequency {
    let re = whole_word_regex(keyword);
    KeywordFrequency {
        resume: re.find_iter(resume_text).count(),
        job: re.find_iter(job_text).count(),
    }
}

/// Importance-weighted share of job keywords the résumé covers, 0 – 100.
/// A job without keywords scores 0.
pub fn keyword_score(matches: &[KeywordMatch]) -> f64 {
    let (matched, total) = matches
        .iter()
        .filter(|m| m.in_job)
        .fold((0.0, 0.0), |(matched, total), m| {
            let hit = if m.in_resume { m.importance } else { 0.0 };
            (matched + hit, total + m.importance)
        });

    if total > 0.0 {
        matched / total * 100.0
    } else {
        0.0
    }
}

/// Keyword score plus a résumé-quality bonus (−10 … +10) and a length bonus
/// (0 … 5), clamped to 0 – 100 and rounded.
pub fn match_score(
    matches: &[KeywordMatch],
    ats_overall: u32,
    resume_word_count: usize,
    job_text: &str,
) -> u32 {
    let quality_bonus = (ats_overall as f64 - QUALITY_BASELINE) * QUALITY_FACTOR;

    let expected_words = (word_count(job_text) as f64 * 0.3).max(MIN_EXPECTED_RESUME_WORDS);
    let length_bonus = (resume_word_count as f64 / expected_words).min(1.0) * LENGTH_BONUS_MAX;

    (keyword_score(matches) + quality_bonus + length_bonus)
        .clamp(0.0, 100.0)
        .round() as u32
}
