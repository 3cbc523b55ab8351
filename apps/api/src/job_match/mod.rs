//! Job matching: compares a stored résumé analysis with a job description.
//!
//! Flow: categorized keyword extraction (résumé ‖ job) → keyword matches →
//!       match score → skills gap → recommendations.
//!
//! The analysis is only read, never modified.

pub mod keyword_match;
pub mod models;
pub mod recommendations;
pub mod skills_gap;
pub mod tables;

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::keywords::{extract_categorized_keywords, CategorizedKeywords};
use crate::analysis::models::ResumeAnalysis;
use crate::analysis::orchestrator::run_stage;
use crate::errors::AnalysisError;

pub use models::{JobMatch, JobMatchRequest};

use keyword_match::{build_keyword_matches, match_score};
use recommendations::generate_job_recommendations;
use skills_gap::find_skill_gaps;

/// Runs the two keyword extractions concurrently, then assembles the `JobMatch`.
/// Any failure surfaces as `AnalysisError::JobMatch`.
pub async fn match_job(
    analysis: &ResumeAnalysis,
    request: JobMatchRequest,
) -> Result<JobMatch, AnalysisError> {
    let resume_text: Arc<str> = Arc::from(analysis.extracted_text.as_str());
    let job_text: Arc<str> = Arc::from(request.job_description.as_str());

    let (resume_keywords, job_keywords) = tokio::try_join!(
        run_stage("resume_keywords", resume_text, extract_categorized_keywords),
        run_stage("job_keywords", job_text, extract_categorized_keywords),
    )
    .map_err(|e| AnalysisError::JobMatch(e.to_string()))?;

    debug!(
        resume_keywords = resume_keywords.total(),
        job_keywords = job_keywords.total(),
        "keywords extracted for job match"
    );

    let job_match = build_job_match(analysis, request, &resume_keywords, &job_keywords);

    info!(
        analysis_id = %analysis.id,
        job_match_id = %job_match.id,
        match_score = job_match.match_score,
        skills_gap = job_match.skills_gap.len(),
        "job match computed"
    );

    Ok(job_match)
}

/// Synchronous assembly from already-extracted keyword sets.
pub fn build_job_match(
    analysis: &ResumeAnalysis,
    request: JobMatchRequest,
    resume_keywords: &CategorizedKeywords,
    job_keywords: &CategorizedKeywords,
) -> JobMatch {
    let keyword_matches = build_keyword_matches(
        resume_keywords,
        job_keywords,
        &analysis.extracted_text,
        &request.job_description,
    );
    let match_score = match_score(
        &keyword_matches,
        analysis.ats_score.overall,
        analysis.content_analysis.word_count,
        &request.job_description,
    );
    let skills_gap = find_skill_gaps(resume_keywords, job_keywords);
    let recommendations = generate_job_recommendations(analysis, &keyword_matches, &skills_gap);

    JobMatch {
        id: Uuid::new_v4(),
        analysis_id: analysis.id,
        job_title: request.job_title,
        company: request.company,
        job_description: request.job_description,
        match_score,
        keyword_matches,
        skills_gap,
        recommendations,
        created_at: Utc::now(),
    }
}
