use crate::analysis::models::ResumeAnalysis;
use crate::job_match::models::{
    JobMatchRecommendation, KeywordMatch, Priority, RecommendationKind, SkillGap,
    SkillImportance,
};
use crate::job_match::tables::CRITICAL_KEYWORD_THRESHOLD;

pub const MAX_JOB_RECOMMENDATIONS: usize = 5;
const MIN_QUANTIFIED_RESULTS: usize = 3;
const MIN_ACTION_VERBS: usize = 5;
const POINTS_PER_KEYWORD: usize = 5;
const MAX_KEYWORD_POINTS: usize = 25;
const LISTED_ITEMS: usize = 5;

/// Recommendations in priority order: missing critical keywords, critical skill
/// gaps, quantification, action verbs.
pub fn generate_job_recommendations(
    analysis: &ResumeAnalysis,
    keyword_matches: &[KeywordMatch],
    skills_gap: &[SkillGap],
) -> Vec<JobMatchRecommendation> {
    let mut recommendations = Vec::new();

    let missing_critical: Vec<&str> = keyword_matches
        .iter()
        .filter(|m| m.in_job && !m.in_resume && m.importance > CRITICAL_KEYWORD_THRESHOLD)
        .map(|m| m.keyword.as_str())
        .collect();
    if !missing_critical.is_empty() {
        let count = missing_critical.len();
        let points = (count * POINTS_PER_KEYWORD).min(MAX_KEYWORD_POINTS);
        recommendations.push(JobMatchRecommendation {
            id: "missing-critical-keywords".to_string(),
            kind: RecommendationKind::Keywords,
            priority: Priority::High,
            title: "Add Missing Critical Keywords".to_string(),
            description: format!(
                "The job description asks for {count} key technologies your résumé does not mention: {}.",
                list(&missing_critical)
            ),
            action: "Work these keywords into your skills section and experience bullets where you have real experience with them.".to_string(),
            impact: format!("Up to +{points} points match score"),
        });
    }

    let critical_gaps: Vec<&SkillGap> = skills_gap
        .iter()
        .filter(|g| g.importance == SkillImportance::Critical)
        .collect();
    if let Some(first) = critical_gaps.first() {
        let skills: Vec<&str> = critical_gaps.iter().map(|g| g.skill.as_str()).collect();
        let action = first
            .suggestions
            .first()
            .cloned()
            .unwrap_or_else(|| format!("Gain hands-on experience with {}", first.skill));
        recommendations.push(JobMatchRecommendation {
            id: "critical-skill-gaps".to_string(),
            kind: RecommendationKind::Skills,
            priority: Priority::High,
            title: "Address Critical Skill Gaps".to_string(),
            description: format!(
                "This role treats these skills as essential and they are missing: {}.",
                list(&skills)
            ),
            action,
            impact: "Closes the gaps recruiters filter on first".to_string(),
        });
    }

    let quantified = analysis.content_analysis.quantifiable_results.len();
    if quantified < MIN_QUANTIFIED_RESULTS {
        recommendations.push(JobMatchRecommendation {
            id: "quantify-achievements".to_string(),
            kind: RecommendationKind::Experience,
            priority: Priority::Medium,
            title: "Quantify Your Achievements".to_string(),
            description: format!(
                "Only {quantified} measurable results found. Numbers make your impact comparable against the role's expectations."
            ),
            action: "Add percentages, amounts, team sizes or time saved to your strongest bullets.".to_string(),
            impact: "Stronger evidence of impact for this role".to_string(),
        });
    }

    let verbs = analysis.content_analysis.action_verbs.len();
    if verbs < MIN_ACTION_VERBS {
        recommendations.push(JobMatchRecommendation {
            id: "strengthen-action-verbs".to_string(),
            kind: RecommendationKind::Content,
            priority: Priority::Medium,
            title: "Use Stronger Action Verbs".to_string(),
            description: format!(
                "Only {verbs} distinct action verbs found. Varied, specific verbs read as ownership."
            ),
            action: "Open bullets with verbs like led, delivered, optimized or launched.".to_string(),
            impact: "Better first impression with recruiters and ATS ranking".to_string(),
        });
    }

    recommendations.truncate(MAX_JOB_RECOMMENDATIONS);
    recommendations
}

fn list(items: &[&str]) -> String {
    let shown = items.iter().take(LISTED_ITEMS).copied().collect::<Vec<_>>().join(", ");
    match items.len().saturating_sub(LISTED_ITEMS) {
        0 => shown,
        more => format!("{shown} and {more} more"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::KeywordCategory;
    use crate::analysis::lexical::analyze_content;
    use crate::analysis::models::{AtsBreakdown, AtsScore};
    use crate::job_match::models::KeywordFrequency;
    use chrono::Utc;
    use uuid::Uuid;

    fn analysis_for(text: &str) -> ResumeAnalysis {
        ResumeAnalysis {
            id: Uuid::new_v4(),
            file_name: "resume.txt".to_string(),
            file_size: text.len() as u64,
            uploaded_at: Utc::now(),
            extracted_text: text.to_string(),
            ats_score: AtsScore {
                overall: 100,
                breakdown: AtsBreakdown {
                    formatting: 100,
                    keywords: 100,
                    structure: 100,
                    readability: 100,
                    length: 100,
                },
                issues: vec![],
                improvements: vec![],
            },
            content_analysis: analyze_content(text),
            recommendations: vec![],
            keywords: vec![],
            sections: vec![],
        }
    }

    fn missing(keyword: &str, importance: f64) -> KeywordMatch {
        KeywordMatch {
            keyword: keyword.to_string(),
            in_resume: false,
            in_job: true,
            frequency: KeywordFrequency { resume: 0, job: 1 },
            importance,
            category: KeywordCategory::Technologies,
        }
    }

    fn gap(skill: &str, importance: SkillImportance) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            category: KeywordCategory::Tools,
            importance,
            suggestions: vec![format!("Learn {skill}")],
            learning_resources: vec![],
        }
    }

    const STRONG: &str = "Led, developed, launched, reduced and improved things: 10%, 20%, $5,000.";

    #[test]
    fn test_all_rules_fire_in_priority_order() {
        let analysis = analysis_for("Responsible for stuff");
        let recs = generate_job_recommendations(
            &analysis,
            &[missing("rust", 0.9)],
            &[gap("docker", SkillImportance::Critical)],
        );
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "missing-critical-keywords",
                "critical-skill-gaps",
                "quantify-achievements",
                "strengthen-action-verbs"
            ]
        );
        assert!(recs.len() <= MAX_JOB_RECOMMENDATIONS);
        assert_eq!(recs[1].action, "Learn docker");
    }

    #[test]
    fn test_no_rules_fire_for_strong_resume() {
        let analysis = analysis_for(STRONG);
        let recs = generate_job_recommendations(
            &analysis,
            &[missing("mentoring", 0.5)],
            &[gap("jira", SkillImportance::NiceToHave)],
        );
        assert!(recs.is_empty(), "got {recs:?}");
    }

    #[test]
    fn test_keyword_impact_scales_and_caps() {
        let analysis = analysis_for(STRONG);
        let two = generate_job_recommendations(
            &analysis,
            &[missing("rust", 0.9), missing("react", 0.85)],
            &[],
        );
        assert_eq!(two[0].impact, "Up to +10 points match score");

        let many: Vec<KeywordMatch> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|k| missing(k, 0.9))
            .collect();
        let recs = generate_job_recommendations(&analysis, &many, &[]);
        assert_eq!(recs[0].impact, "Up to +25 points match score");
        assert!(recs[0].description.contains("and 2 more"));
    }

    #[test]
    fn test_cloud_keywords_are_not_critical() {
        // 0.8 is not above the threshold
        let analysis = analysis_for(STRONG);
        let recs = generate_job_recommendations(&analysis, &[missing("aws", 0.8)], &[]);
        assert!(recs.is_empty());
    }
}
