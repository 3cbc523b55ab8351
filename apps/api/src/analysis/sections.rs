//! Heuristic section detection.
//!
//! Every pattern that matches emits its own `DetectedSection`, so one logical
//! section can show up more than once (e.g. "Work Experience" hits both the
//! `experience` and `work` patterns).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{DetectedSection, SectionType};
use crate::analysis::text::{advance_chars, retreat_chars};

const SECTION_CONFIDENCE: f64 = 0.8;
/// Chars taken either side of the match start.
const SECTION_HALF_WINDOW: usize = 100;

const SECTION_PATTERNS: &[(SectionType, &[&str])] = &[
    (SectionType::Contact, &[r"(?i)contact", r"(?i)email", r"(?i)phone"]),
    (SectionType::Summary, &[r"(?i)summary", r"(?i)profile", r"(?i)objective"]),
    (SectionType::Experience, &[r"(?i)experience", r"(?i)employment", r"(?i)work"]),
    (SectionType::Education, &[r"(?i)education", r"(?i)degree", r"(?i)university"]),
    (SectionType::Skills, &[r"(?i)skills", r"(?i)technical", r"(?i)competencies"]),
    (SectionType::Projects, &[r"(?i)projects", r"(?i)portfolio"]),
    (SectionType::Certifications, &[r"(?i)certifications?", r"(?i)licenses?"]),
];

static COMPILED_PATTERNS: Lazy<Vec<(SectionType, Vec<Regex>)>> = Lazy::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|(section, patterns)| {
            let compiled = patterns.iter().map(|p| Regex::new(p).unwrap()).collect();
            (*section, compiled)
        })
        .collect()
});

/// Sections in type declaration order, then pattern order within a type.
pub fn detect_sections(text: &str) -> Vec<DetectedSection> {
    let mut sections = Vec::new();

    for (section_type, patterns) in COMPILED_PATTERNS.iter() {
        for re in patterns {
            let Some(m) = re.find(text) else {
                continue;
            };
            let start = retreat_chars(text, m.start(), SECTION_HALF_WINDOW);
            let end = advance_chars(text, m.start(), SECTION_HALF_WINDOW);
            sections.push(DetectedSection {
                section_type: *section_type,
                title: m.as_str().to_string(),
                content: text[start..end].to_string(),
                start_index: start,
                end_index: end,
                confidence: SECTION_CONFIDENCE,
                issues: vec![],
            });
        }
    }

    sections
}
