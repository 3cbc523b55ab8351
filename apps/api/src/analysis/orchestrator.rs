//! Analysis orchestration. Fans the five independent sub-analyses out over the
//! same immutable text and assembles a `ResumeAnalysis` once all of them finish.
//!
//! Each branch is CPU-bound, so it runs on `tokio::task::spawn_blocking`. The text is
//! shared as `Arc<str>` to satisfy the `'static` closure bound. A branch that fails
//! (panics) fails the whole analysis.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::ats::score_ats;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::lexical::analyze_content;
use crate::analysis::models::{FileMeta, ResumeAnalysis};
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::sections::detect_sections;
use crate::errors::AnalysisError;

/// Runs one CPU-bound stage on the blocking pool.
pub(crate) async fn run_stage<T, F>(
    stage: &'static str,
    text: Arc<str>,
    f: F,
) -> Result<T, AnalysisError>
where
    F: FnOnce(&str) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&text))
        .await
        .map_err(|e| AnalysisError::Stage {
            stage,
            message: e.to_string(),
        })
}

/// Analyzes one extracted document.
pub async fn analyze(text: String, meta: FileMeta) -> Result<ResumeAnalysis, AnalysisError> {
    let shared: Arc<str> = Arc::from(text.as_str());

    let (ats_score, content_analysis, keywords, sections, recommendations) = tokio::try_join!(
        run_stage("ats_score", shared.clone(), score_ats),
        run_stage("content_analysis", shared.clone(), analyze_content),
        run_stage("keywords", shared.clone(), extract_keywords),
        run_stage("sections", shared.clone(), detect_sections),
        run_stage("recommendations", shared, generate_recommendations),
    )?;

    let analysis = ResumeAnalysis {
        id: Uuid::new_v4(),
        file_name: meta.file_name,
        file_size: meta.file_size,
        uploaded_at: Utc::now(),
        extracted_text: text,
        ats_score,
        content_analysis,
        recommendations,
        keywords,
        sections,
    };

    debug!(
        keywords = analysis.keywords.len(),
        sections = analysis.sections.len(),
        recommendations = analysis.recommendations.len(),
        "analysis stages complete"
    );
    info!(
        analysis_id = %analysis.id,
        file_name = %analysis.file_name,
        ats_overall = analysis.ats_score.overall,
        "résumé analyzed"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe. Email: john@x.com. Phone: 555-123-4567. \
        Developed a React application serving 10000 users. Reduced load time by 40%.";

    fn meta() -> FileMeta {
        FileMeta {
            file_name: "resume.txt".to_string(),
            file_size: SAMPLE.len() as u64,
        }
    }

    #[tokio::test]
    async fn test_analyze_assembles_all_parts() {
        let analysis = analyze(SAMPLE.to_string(), meta()).await.unwrap();

        assert_eq!(analysis.file_name, "resume.txt");
        assert_eq!(analysis.extracted_text, SAMPLE);
        assert_eq!(analysis.ats_score.breakdown.structure, 100);
        assert!(analysis
            .content_analysis
            .action_verbs
            .contains(&"developed".to_string()));
        assert!(analysis
            .content_analysis
            .quantifiable_results
            .iter()
            .any(|q| q.value == "40%"));
        assert!(!analysis.keywords.is_empty());
        assert!(analysis
            .sections
            .iter()
            .any(|s| s.section_type == crate::analysis::models::SectionType::Contact));
    }

    #[tokio::test]
    async fn test_analyze_matches_direct_calls() {
        let analysis = analyze(SAMPLE.to_string(), meta()).await.unwrap();
        assert_eq!(analysis.content_analysis, analyze_content(SAMPLE));
        assert_eq!(analysis.keywords, extract_keywords(SAMPLE));
        assert_eq!(analysis.sections, detect_sections(SAMPLE));
        assert_eq!(analysis.recommendations, generate_recommendations(SAMPLE));
    }

    #[tokio::test]
    async fn test_analyze_empty_text() {
        let analysis = analyze(String::new(), meta()).await.unwrap();
        assert_eq!(analysis.content_analysis.word_count, 0);
        assert_eq!(analysis.content_analysis.page_count, 1);
        assert!(analysis.ats_score.overall <= 100);
    }

    #[tokio::test]
    async fn test_failing_stage_fails_whole_run() {
        let shared: Arc<str> = Arc::from("text");
        let result: Result<(), AnalysisError> =
            run_stage("broken", shared, |_| panic!("stage exploded")).await;
        match result {
            Err(AnalysisError::Stage { stage, .. }) => assert_eq!(stage, "broken"),
            other => panic!("expected stage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_each_analysis_gets_fresh_id() {
        let a = analyze(SAMPLE.to_string(), meta()).await.unwrap();
        let b = analyze(SAMPLE.to_string(), meta()).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
