use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::keywords::KeywordCategory;

/// A job posting submitted for comparison against a stored analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchRequest {
    pub job_title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub job_description: String,
}

/// Result of comparing one `ResumeAnalysis` with one job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: Uuid,
    pub analysis_id: Uuid,
    pub job_title: String,
    pub company: Option<String>,
    pub job_description: String,
    /// 0 – 100
    pub match_score: u32,
    pub keyword_matches: Vec<KeywordMatch>,
    pub skills_gap: Vec<SkillGap>,
    pub recommendations: Vec<JobMatchRecommendation>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub resume: usize,
    pub job: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub in_resume: bool,
    pub in_job: bool,
    pub frequency: KeywordFrequency,
    pub importance: f64,
    pub category: KeywordCategory,
}

/// Ordering is significance: `Critical < Important < NiceToHave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillImportance {
    Critical,
    Important,
    NiceToHave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub category: KeywordCategory,
    pub importance: SkillImportance,
    pub suggestions: Vec<String>,
    pub learning_resources: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Keywords,
    Skills,
    Experience,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    pub impact: String,
}
