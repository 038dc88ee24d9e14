use crate::insights::Insights;
use log::debug;
use serde::Serialize;

pub const GENERALIST: &str = "Generalist";

const LANGUAGE_WEIGHT: f64 = 0.5;
const TOPIC_POINTS: f64 = 10.0;

pub struct SkillCategory {
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub topics: &'static [&'static str],
}

/// Radar axes in output order.
pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        name: "Frontend",
        languages: &["JavaScript", "TypeScript", "HTML", "CSS", "SCSS", "Vue", "Svelte"],
        topics: &["react", "vue", "angular", "svelte", "frontend", "nextjs", "tailwind", "css"],
    },
    SkillCategory {
        name: "Backend",
        languages: &["Java", "Go", "Python", "Ruby", "PHP", "C#", "Rust", "Elixir", "Scala"],
        topics: &["api", "backend", "server", "express", "django", "flask", "spring", "graphql"],
    },
    SkillCategory {
        name: "Mobile",
        languages: &["Swift", "Kotlin", "Dart", "Objective-C"],
        topics: &["android", "ios", "flutter", "mobile", "react-native", "swiftui"],
    },
    SkillCategory {
        name: "DevOps",
        languages: &["Shell", "Dockerfile", "HCL", "PowerShell", "Nix"],
        topics: &["docker", "kubernetes", "devops", "terraform", "ci-cd", "aws", "ansible"],
    },
    SkillCategory {
        name: "Data/AI",
        languages: &["Python", "Jupyter Notebook", "R", "Julia"],
        topics: &["machine-learning", "deep-learning", "data", "ai", "nlp", "pytorch", "tensorflow"],
    },
    SkillCategory {
        name: "Database",
        languages: &["SQL", "PLpgSQL", "TSQL", "PLSQL"],
        topics: &["database", "sql", "postgres", "mysql", "mongodb", "redis", "sqlite"],
    },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SkillScore {
    pub skill: &'static str,
    pub value: u8,
}

pub type SkillVector = Vec<SkillScore>;

pub fn compute_skill_radar(insights: &Insights) -> SkillVector {
    let topics: Vec<String> = insights
        .topics
        .iter()
        .map(|(topic, _)| topic.to_lowercase())
        .collect();

    SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let language_score: f64 = category
                .languages
                .iter()
                .map(|language| insights.language_percentage(language) * LANGUAGE_WEIGHT)
                .sum();
            let topic_score: f64 = category
                .topics
                .iter()
                .filter(|keyword| topics.iter().any(|topic| topic.contains(**keyword)))
                .map(|_| TOPIC_POINTS)
                .sum();

            let value = (language_score + topic_score).clamp(0.0, 100.0).round() as u8;
            debug!(
                "{}: languages {language_score:.1} + topics {topic_score:.0} -> {value}",
                category.name
            );
            SkillScore {
                skill: category.name,
                value,
            }
        })
        .collect()
}

/// Highest-valued axis; ties go to the earlier axis.
pub fn primary_skill(vector: &[SkillScore]) -> &'static str {
    let mut ranked: Vec<&SkillScore> = vector.iter().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.first().map_or(GENERALIST, |top| top.skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insights_with(languages: &[(&str, f64)], topics: &[&str]) -> Insights {
        let mut insights = Insights::default();
        insights.languages.percentages = languages
            .iter()
            .map(|(name, share)| (name.to_string(), *share))
            .collect();
        insights.topics = topics.iter().map(|t| (t.to_string(), 1.0)).collect();
        insights
    }

    fn value_of(vector: &[SkillScore], skill: &str) -> u8 {
        vector.iter().find(|s| s.skill == skill).unwrap().value
    }

    #[test]
    fn empty_insights_yield_six_zero_axes() {
        let vector = compute_skill_radar(&Insights::default());
        let names: Vec<&str> = vector.iter().map(|s| s.skill).collect();
        assert_eq!(
            names,
            vec!["Frontend", "Backend", "Mobile", "DevOps", "Data/AI", "Database"]
        );
        assert!(vector.iter().all(|s| s.value == 0));
        assert_eq!(primary_skill(&vector), "Frontend");
    }

    #[test]
    fn languages_and_topics_combine() {
        let insights = insights_with(&[("JavaScript", 40.0), ("Python", 30.0)], &["react", "docker"]);
        let vector = compute_skill_radar(&insights);

        assert_eq!(value_of(&vector, "Frontend"), 30);
        assert_eq!(value_of(&vector, "Backend"), 15);
        assert_eq!(value_of(&vector, "DevOps"), 10);
        assert_eq!(value_of(&vector, "Data/AI"), 15);
        assert_eq!(value_of(&vector, "Mobile"), 0);
        assert_eq!(primary_skill(&vector), "Frontend");
    }

    #[test]
    fn topic_match_is_case_insensitive_substring() {
        let insights = insights_with(&[], &["Awesome-Kubernetes-Operators", "PostgreSQL-tools"]);
        let vector = compute_skill_radar(&insights);

        assert_eq!(value_of(&vector, "DevOps"), 10);
        // "postgresql-tools" contains both "postgres" and "sql"
        assert_eq!(value_of(&vector, "Database"), 20);
    }

    #[test]
    fn language_names_match_exactly() {
        let insights = insights_with(&[("javascript", 90.0)], &[]);
        let vector = compute_skill_radar(&insights);
        assert_eq!(value_of(&vector, "Frontend"), 0);
    }

    #[test]
    fn values_clamp_at_one_hundred() {
        let insights = insights_with(
            &[("JavaScript", 100.0), ("TypeScript", 100.0)],
            &["react", "vue", "angular", "frontend"],
        );
        let vector = compute_skill_radar(&insights);
        assert_eq!(value_of(&vector, "Frontend"), 100);
    }

    #[test]
    fn primary_skill_prefers_highest_then_earliest() {
        let vector = vec![
            SkillScore { skill: "Frontend", value: 10 },
            SkillScore { skill: "Backend", value: 40 },
            SkillScore { skill: "Mobile", value: 25 },
        ];
        assert_eq!(primary_skill(&vector), "Backend");

        let tied = vec![
            SkillScore { skill: "DevOps", value: 30 },
            SkillScore { skill: "Database", value: 30 },
        ];
        assert_eq!(primary_skill(&tied), "DevOps");
    }

    #[test]
    fn empty_vector_is_generalist() {
        assert_eq!(primary_skill(&[]), GENERALIST);
    }
}
