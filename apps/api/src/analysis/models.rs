//! Résumé analysis records. Built once per upload by the orchestrator and never
//! mutated afterwards; everything here serializes to JSON for the UI and the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Provenance
// ────────────────────────────────────────────────────────────────────────────

/// Metadata handed over by the text extractor alongside the plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    pub file_name: String,
    pub file_size: u64,
}

/// The complete output for one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub file_name: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub extracted_text: String,
    pub ats_score: AtsScore,
    pub content_analysis: ContentAnalysis,
    pub recommendations: Vec<Recommendation>,
    /// Highest frequency first.
    pub keywords: Vec<ExtractedKeyword>,
    pub sections: Vec<DetectedSection>,
}

// ────────────────────────────────────────────────────────────────────────────
// ATS score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    /// round(mean(breakdown)), 0 – 100
    pub overall: u32,
    pub breakdown: AtsBreakdown,
    pub issues: Vec<AtsIssue>,
    pub improvements: Vec<String>,
}

/// Sub-scores, each 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    /// No formatting checks run on plain text; always 100.
    pub formatting: u32,
    pub keywords: u32,
    pub structure: u32,
    pub readability: u32,
    pub length: u32,
}

impl AtsBreakdown {
    pub fn values(&self) -> [u32; 5] {
        [
            self.formatting,
            self.keywords,
            self.structure,
            self.readability,
            self.length,
        ]
    }

    pub fn mean_rounded(&self) -> u32 {
        let values = self.values();
        let sum: u32 = values.iter().sum();
        (sum as f64 / values.len() as f64).round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Critical,
    Warning,
    Suggestion,
}

/// The sub-score an issue is charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsCategory {
    Formatting,
    Keywords,
    Structure,
    Readability,
    Length,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsIssue {
    #[serde(rename = "type")]
    pub severity: IssueSeverity,
    pub category: AtsCategory,
    pub message: String,
    /// Points deducted from the category's sub-score.
    pub impact: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Content analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub page_count: usize,
    pub sentence_count: usize,
    /// Simplified Flesch reading ease, clamped to 0 – 100.
    pub readability_score: i32,
    pub action_verbs: Vec<String>,
    pub quantifiable_results: Vec<QuantifiableResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Percentage,
    Currency,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantifiableResult {
    pub value: String,
    pub kind: QuantityKind,
    pub context: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Keywords and sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordClass {
    Skill,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeyword {
    pub word: String,
    pub frequency: usize,
    pub category: KeywordClass,
    /// 0.0 – 1.0
    pub importance: f64,
    pub context: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// The matched text.
    pub title: String,
    pub content: String,
    pub start_index: usize,
    pub end_index: usize,
    pub confidence: f64,
    pub issues: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Critical,
    Important,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub category: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}
