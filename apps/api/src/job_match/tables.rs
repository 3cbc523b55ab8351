//! Static rule tables for job matching. Kept as data so the scoring code stays
//! small and the numbers can be audited in one place.

use crate::analysis::keywords::KeywordCategory;
use crate::job_match::models::SkillImportance;

/// Weight of a keyword by the category it was found in.
pub const CATEGORY_WEIGHTS: &[(KeywordCategory, f64)] = &[
    (KeywordCategory::Technologies, 0.9),
    (KeywordCategory::Frameworks, 0.85),
    (KeywordCategory::Cloud, 0.8),
    (KeywordCategory::ExperienceLevels, 0.75),
    (KeywordCategory::Tools, 0.7),
    (KeywordCategory::Methodologies, 0.6),
    (KeywordCategory::SoftSkills, 0.5),
    (KeywordCategory::General, 0.3),
];

/// Weight given to résumé keywords the job does not mention.
pub const RESUME_ONLY_WEIGHT: f64 = 0.3;

/// Keywords above this weight count as critical when missing.
pub const CRITICAL_KEYWORD_THRESHOLD: f64 = 0.8;

/// Categories whose missing job keywords are reported as skill gaps.
pub const GAP_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory::Technologies,
    KeywordCategory::Frameworks,
    KeywordCategory::Tools,
    KeywordCategory::Cloud,
    KeywordCategory::Methodologies,
];

pub const CRITICAL_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "react",
    "node.js",
    "sql",
    "aws",
    "docker",
    "kubernetes",
];

pub const IMPORTANT_SKILLS: &[&str] = &[
    "git",
    "agile",
    "rest",
    "microservices",
    "ci/cd",
    "postgresql",
    "mongodb",
    "terraform",
    "graphql",
    "azure",
];

pub struct SkillGuidance {
    pub skill: &'static str,
    pub suggestions: &'static [&'static str],
    pub resources: &'static [&'static str],
}

pub const SKILL_GUIDANCE: &[SkillGuidance] = &[
    SkillGuidance {
        skill: "react",
        suggestions: &[
            "Build a small single-page app with React hooks and routing",
            "Contribute a component or fix to an open-source React project",
        ],
        resources: &["react.dev official tutorial", "Epic React by Kent C. Dodds"],
    },
    SkillGuidance {
        skill: "typescript",
        suggestions: &[
            "Port an existing JavaScript project to TypeScript",
            "Enable strict mode and fix the resulting type errors",
        ],
        resources: &["The TypeScript Handbook", "Type Challenges on GitHub"],
    },
    SkillGuidance {
        skill: "javascript",
        suggestions: &[
            "Build a project using modern ES modules and async/await",
            "Practise DOM and event handling without a framework",
        ],
        resources: &["MDN JavaScript Guide", "javascript.info"],
    },
    SkillGuidance {
        skill: "python",
        suggestions: &[
            "Automate a repetitive task with a Python script",
            "Build a small REST API with FastAPI or Flask",
        ],
        resources: &["The official Python tutorial", "Real Python"],
    },
    SkillGuidance {
        skill: "node.js",
        suggestions: &[
            "Build a REST API with Express and a database",
            "Write a CLI tool published to npm",
        ],
        resources: &["nodejs.org Learn section", "The Node.js Best Practices repo"],
    },
    SkillGuidance {
        skill: "sql",
        suggestions: &[
            "Practise joins, window functions and query plans on a real dataset",
            "Design a normalized schema for a side project",
        ],
        resources: &["SQLBolt", "Use The Index, Luke"],
    },
    SkillGuidance {
        skill: "docker",
        suggestions: &[
            "Containerize one of your existing projects",
            "Write a docker-compose setup with an app and a database",
        ],
        resources: &["Docker's Get Started guide", "Play with Docker labs"],
    },
    SkillGuidance {
        skill: "kubernetes",
        suggestions: &[
            "Deploy a containerized app to a local kind or minikube cluster",
            "Prepare for the CKAD certification",
        ],
        resources: &["kubernetes.io tutorials", "Kubernetes the Hard Way"],
    },
    SkillGuidance {
        skill: "aws",
        suggestions: &[
            "Deploy a project using EC2, S3 and IAM on the free tier",
            "Earn the AWS Certified Cloud Practitioner certification",
        ],
        resources: &["AWS Skill Builder", "AWS Well-Architected Framework"],
    },
    SkillGuidance {
        skill: "terraform",
        suggestions: &[
            "Describe a small cloud environment as Terraform modules",
            "Set up remote state and a plan/apply pipeline",
        ],
        resources: &["HashiCorp Learn Terraform tutorials", "Terraform Up & Running"],
    },
];

pub fn category_weight(category: KeywordCategory) -> f64 {
    CATEGORY_WEIGHTS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, w)| *w)
        .unwrap_or(RESUME_ONLY_WEIGHT)
}

pub fn skill_importance(skill: &str, category: KeywordCategory) -> SkillImportance {
    if CRITICAL_SKILLS.contains(&skill) {
        SkillImportance::Critical
    } else if IMPORTANT_SKILLS.contains(&skill) || category == KeywordCategory::Technologies {
        SkillImportance::Important
    } else {
        SkillImportance::NiceToHave
    }
}

/// Suggestions and learning resources for a skill, falling back to a generic template.
pub fn skill_guidance(skill: &str) -> (Vec<String>, Vec<String>) {
    if let Some(g) = SKILL_GUIDANCE.iter().find(|g| g.skill == skill) {
        return (
            g.suggestions.iter().map(|s| s.to_string()).collect(),
            g.resources.iter().map(|s| s.to_string()).collect(),
        );
    }

    (
        vec![
            format!("Take an online course or certification in {skill}"),
            format!("Build a small project that uses {skill} and link it from your résumé"),
            format!("Mention any existing exposure to {skill} in your experience bullets"),
        ],
        vec![
            format!("Official {skill} documentation"),
            format!("{skill} courses on Coursera or Udemy"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_weight() {
        for category in [
            KeywordCategory::Technologies,
            KeywordCategory::Frameworks,
            KeywordCategory::Tools,
            KeywordCategory::Cloud,
            KeywordCategory::Methodologies,
            KeywordCategory::SoftSkills,
            KeywordCategory::ExperienceLevels,
            KeywordCategory::General,
        ] {
            assert!(CATEGORY_WEIGHTS.iter().any(|(c, _)| *c == category));
        }
        assert_eq!(category_weight(KeywordCategory::Technologies), 0.9);
        assert_eq!(category_weight(KeywordCategory::General), 0.3);
    }

    #[test]
    fn test_skill_importance_rules() {
        assert_eq!(
            skill_importance("docker", KeywordCategory::Tools),
            SkillImportance::Critical
        );
        assert_eq!(
            skill_importance("terraform", KeywordCategory::Tools),
            SkillImportance::Important
        );
        assert_eq!(
            skill_importance("kotlin", KeywordCategory::Technologies),
            SkillImportance::Important
        );
        assert_eq!(
            skill_importance("jira", KeywordCategory::Tools),
            SkillImportance::NiceToHave
        );
    }

    #[test]
    fn test_skill_lists_have_ten_entries() {
        assert_eq!(CRITICAL_SKILLS.len(), 10);
        assert_eq!(IMPORTANT_SKILLS.len(), 10);
    }

    #[test]
    fn test_guidance_lookup_and_fallback() {
        let (suggestions, resources) = skill_guidance("docker");
        assert!(suggestions[0].contains("Containerize"));
        assert_eq!(resources.len(), 2);

        let (suggestions, resources) = skill_guidance("kafka");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.contains("kafka")));
        assert!(resources[0].contains("kafka"));
    }
}
