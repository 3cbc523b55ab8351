use crate::analysis::keywords::CategorizedKeywords;
use crate::job_match::models::SkillGap;
use crate::job_match::tables::{skill_guidance, skill_importance, GAP_CATEGORIES};

/// Job keywords from the technical categories that the résumé lacks in the same
/// category, most important first.
pub fn find_skill_gaps(
    resume_keywords: &CategorizedKeywords,
    job_keywords: &CategorizedKeywords,
) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = GAP_CATEGORIES
        .iter()
        .flat_map(|&category| {
            job_keywords
                .get(category)
                .iter()
                .filter(move |skill| !resume_keywords.contains(category, skill))
                .map(move |skill| {
                    let (suggestions, learning_resources) = skill_guidance(skill);
                    SkillGap {
                        skill: skill.clone(),
                        category,
                        importance: skill_importance(skill, category),
                        suggestions,
                        learning_resources,
                    }
                })
        })
        .collect();

    gaps.sort_by_key(|g| g.importance);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::KeywordCategory;
    use crate::job_match::models::SkillImportance;

    fn keywords(entries: &[(KeywordCategory, &[&str])]) -> CategorizedKeywords {
        entries
            .iter()
            .map(|(c, words)| (*c, words.iter().map(|w| w.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_single_missing_technology() {
        let job = keywords(&[(KeywordCategory::Technologies, &["react", "docker"])]);
        let resume = keywords(&[(KeywordCategory::Technologies, &["react"])]);

        let gaps = find_skill_gaps(&resume, &job);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].skill, "docker");
        assert_eq!(gaps[0].category, KeywordCategory::Technologies);
        assert!(!gaps[0].suggestions.is_empty());
        assert!(!gaps[0].learning_resources.is_empty());
    }

    #[test]
    fn test_gaps_sorted_by_importance() {
        let job = keywords(&[
            (KeywordCategory::Tools, &["jira", "terraform", "docker"]),
            (KeywordCategory::Methodologies, &["kanban"]),
        ]);
        let gaps = find_skill_gaps(&CategorizedKeywords::default(), &job);
        let order: Vec<(&str, SkillImportance)> =
            gaps.iter().map(|g| (g.skill.as_str(), g.importance)).collect();
        assert_eq!(
            order,
            vec![
                ("docker", SkillImportance::Critical),
                ("terraform", SkillImportance::Important),
                ("jira", SkillImportance::NiceToHave),
                ("kanban", SkillImportance::NiceToHave),
            ]
        );
    }

    #[test]
    fn test_soft_skills_and_general_are_not_gaps() {
        let job = keywords(&[
            (KeywordCategory::SoftSkills, &["leadership"]),
            (KeywordCategory::ExperienceLevels, &["senior"]),
            (KeywordCategory::General, &["billing"]),
        ]);
        assert!(find_skill_gaps(&CategorizedKeywords::default(), &job).is_empty());
    }

    #[test]
    fn test_present_skill_in_other_category_still_counts_as_gap() {
        let job = keywords(&[(KeywordCategory::Tools, &["docker"])]);
        let resume = keywords(&[(KeywordCategory::General, &["docker"])]);
        let gaps = find_skill_gaps(&resume, &job);
        assert_eq!(gaps.len(), 1);
    }

    #[test]
    fn test_never_reports_skill_present_in_same_category() {
        let job = keywords(&[
            (KeywordCategory::Technologies, &["rust", "python"]),
            (KeywordCategory::Cloud, &["aws", "gcp"]),
        ]);
        let resume = keywords(&[
            (KeywordCategory::Technologies, &["python"]),
            (KeywordCategory::Cloud, &["gcp"]),
        ]);
        for gap in find_skill_gaps(&resume, &job) {
            assert!(!resume.contains(gap.category, &gap.skill));
        }
    }
}
