use crate::config::{Config, ReportConfig};
use crate::core::plan::ImprovementPlan;
use crate::core::radar::SkillScore;
use crate::core::score::{ProfileScore, Rating, ScoreCategory};
use colored::{ColoredString, Colorize};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub profile: Option<ProfileScore>,
    pub plan: Option<ImprovementPlan>,
    pub skills: Option<Vec<SkillScore>>,
    pub primary_skill: Option<&'static str>,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ImprovementPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_skill: Option<&'static str>,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            profile: report.profile.clone(),
            plan: report.plan.clone(),
            skills: report.skills.clone(),
            primary_skill: report.primary_skill,
        }
    }
}

pub fn evaluate_exit(profile: Option<&ProfileScore>, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if let Some(profile) = profile
        && profile.score < cfg.general.min_score
    {
        reasons.push(format!(
            "score {} is below min_score {}",
            profile.score, cfg.general.min_score
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport, cfg: &ReportConfig) {
    if let Some(profile) = &report.profile {
        print_profile(profile, cfg);
    }

    if cfg.show_plan
        && let Some(plan) = &report.plan
    {
        print_plan(plan);
    }

    if cfg.show_skills
        && let Some(skills) = &report.skills
    {
        print_skills(skills, report.primary_skill);
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

fn print_profile(profile: &ProfileScore, cfg: &ReportConfig) {
    println!(
        "{} Profile Score: {}/100 ({})",
        profile.rating_icon,
        profile.score,
        colored_rating(profile.rating)
    );

    println!();
    println!("{}", "BREAKDOWN".bold());
    for category in ScoreCategory::ALL {
        let pct = profile.breakdown.get(category);
        println!(
            "{:<13} {} {:>3}%  ({}/{})",
            category.to_string(),
            bar(pct),
            pct,
            profile.sub_scores.get(category),
            category.max_points()
        );
    }

    if cfg.show_achievements && !profile.achievements.is_empty() {
        println!();
        println!(
            "{} ({})",
            "ACHIEVEMENTS".green().bold(),
            profile.achievements.len()
        );
        for achievement in &profile.achievements {
            println!("+ {}", achievement);
        }
    }

    if !profile.tips.is_empty() {
        println!();
        println!("{} ({})", "TIPS".yellow().bold(), profile.tips.len());
        for tip in &profile.tips {
            println!("[+{}] ({}) {}", tip.points, tip.category, tip.tip);
        }
    }
}

fn print_plan(plan: &ImprovementPlan) {
    println!();
    println!("{}", "IMPROVEMENT PLAN".blue().bold());
    println!("timeframe: {}", plan.timeframe);
    println!("potential score: {}/100", plan.potential_score);
    for (idx, tip) in plan.priority.iter().enumerate() {
        println!("{}. {} (+{})", idx + 1, tip.tip, tip.points);
    }
}

fn print_skills(skills: &[SkillScore], primary: Option<&str>) {
    println!();
    println!("{}", "SKILL RADAR".magenta().bold());
    for skill in skills {
        println!("{:<9} {} {:>3}", skill.skill, bar(skill.value), skill.value);
    }
    if let Some(primary) = primary {
        println!("primary skill: {}", primary.bold());
    }
}

fn colored_rating(rating: Rating) -> ColoredString {
    match rating {
        Rating::Exceptional | Rating::Excellent => rating.as_str().green().bold(),
        Rating::Good => rating.as_str().blue().bold(),
        Rating::Average | Rating::Developing => rating.as_str().yellow().bold(),
        Rating::Beginner => rating.as_str().red().bold(),
    }
}

fn bar(pct: u8) -> String {
    let filled = usize::from(pct.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::score_insights;
    use crate::insights::Insights;
    use chrono::{TimeZone, Utc};

    #[test]
    fn exit_fails_below_min_score() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let profile = score_insights(&Insights::default(), now);
        let mut cfg = Config::default();

        assert!(evaluate_exit(Some(&profile), &cfg).ok);

        cfg.general.min_score = 50;
        let exit = evaluate_exit(Some(&profile), &cfg);
        assert!(!exit.ok);
        assert_eq!(exit.reason_line(), "score 0 is below min_score 50");

        assert!(evaluate_exit(None, &cfg).ok);
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).matches('#').count(), BAR_WIDTH / 2);
    }
}
