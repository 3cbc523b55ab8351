//! Rule-based résumé improvement suggestions. Each rule fires independently.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{Effort, Impact, Recommendation, RecommendationType};
use crate::analysis::text::whole_word_regex;

const CORE_ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
];

static CORE_VERB_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| CORE_ACTION_VERBS.iter().map(|v| whole_word_regex(v)).collect());
static SUMMARY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:summary|profile|objective)\b").unwrap());

pub fn generate_recommendations(text: &str) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !text.chars().any(|c| c.is_ascii_digit()) {
        recommendations.push(Recommendation {
            id: "add-quantifiable-results".to_string(),
            recommendation_type: RecommendationType::Important,
            category: "content".to_string(),
            title: "Add Quantifiable Results".to_string(),
            description: "Your résumé has no numbers. Metrics show the scale and impact of \
                your work and are what recruiters scan for first."
                .to_string(),
            impact: Impact::High,
            effort: Effort::Moderate,
            examples: vec![
                "Increased sales by 25% over two quarters".to_string(),
                "Managed a team of 8 engineers".to_string(),
                "Reduced processing time from 3 hours to 20 minutes".to_string(),
            ],
        });
    }

    if !CORE_VERB_PATTERNS.iter().any(|re| re.is_match(text)) {
        recommendations.push(Recommendation {
            id: "use-strong-action-verbs".to_string(),
            recommendation_type: RecommendationType::Important,
            category: "language".to_string(),
            title: "Use Strong Action Verbs".to_string(),
            description: "Start bullet points with verbs that show ownership instead of \
                phrases like \"responsible for\"."
                .to_string(),
            impact: Impact::High,
            effort: Effort::Easy,
            examples: vec![
                "Led a cross-functional team of 5 to deliver the billing rewrite".to_string(),
                "Developed an internal tool used by 200 support agents".to_string(),
                "Implemented automated testing that cut release defects in half".to_string(),
            ],
        });
    }

    if !SUMMARY_HEADING.is_match(text) {
        recommendations.push(Recommendation {
            id: "add-professional-summary".to_string(),
            recommendation_type: RecommendationType::Suggestion,
            category: "structure".to_string(),
            title: "Add Professional Summary".to_string(),
            description: "A short summary at the top tells recruiters who you are and what \
                you are looking for."
                .to_string(),
            impact: Impact::Medium,
            effort: Effort::Easy,
            examples: vec![
                "Backend engineer with 6 years of experience building payment systems in Go and Rust"
                    .to_string(),
            ],
        });
    }

    recommendations
}
