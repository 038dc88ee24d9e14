pub mod plan;
pub mod radar;
pub mod report;
pub mod score;

use crate::config::Config;
use crate::core::report::FinalReport;
use crate::insights::Insights;
use chrono::{DateTime, Utc};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunProfile {
    Full,
    ScoreOnly,
    PlanOnly,
    SkillsOnly,
}

impl RunProfile {
    fn wants_score(self) -> bool {
        matches!(self, Self::Full | Self::ScoreOnly | Self::PlanOnly)
    }

    fn wants_plan(self) -> bool {
        matches!(self, Self::Full | Self::PlanOnly)
    }

    fn wants_skills(self) -> bool {
        matches!(self, Self::Full | Self::SkillsOnly)
    }
}

pub fn build_report(
    insights: &Insights,
    cfg: &Config,
    profile: RunProfile,
    now: DateTime<Utc>,
) -> FinalReport {
    let score = profile
        .wants_score()
        .then(|| score::score_insights(insights, now));
    if let Some(score) = &score {
        info!("profile score {} ({})", score.score, score.rating);
    }

    let plan = if profile.wants_plan() {
        plan::compute_improvement_plan(score.as_ref())
    } else {
        None
    };

    let skills = profile
        .wants_skills()
        .then(|| radar::compute_skill_radar(insights));
    let primary_skill = skills.as_deref().map(radar::primary_skill);

    let exit = report::evaluate_exit(score.as_ref(), cfg);

    FinalReport {
        // plan-only runs score internally but only report the plan
        profile: score.filter(|_| profile != RunProfile::PlanOnly),
        plan,
        skills,
        primary_skill,
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn full_profile_fills_every_section() {
        let report = build_report(&Insights::default(), &Config::default(), RunProfile::Full, now());
        assert!(report.profile.is_some());
        assert!(report.plan.is_some());
        assert_eq!(report.skills.as_ref().map(Vec::len), Some(6));
        assert_eq!(report.primary_skill, Some("Frontend"));
        assert!(report.exit.ok);
    }

    #[test]
    fn skills_only_skips_scoring() {
        let mut cfg = Config::default();
        cfg.general.min_score = 90;
        let report = build_report(&Insights::default(), &cfg, RunProfile::SkillsOnly, now());
        assert!(report.profile.is_none());
        assert!(report.plan.is_none());
        assert!(report.skills.is_some());
        assert!(report.exit.ok);
    }

    #[test]
    fn plan_only_still_enforces_min_score() {
        let mut cfg = Config::default();
        cfg.general.min_score = 10;
        let report = build_report(&Insights::default(), &cfg, RunProfile::PlanOnly, now());
        assert!(report.profile.is_none());
        assert!(report.plan.is_some());
        assert!(!report.exit.ok);
    }
}
