use crate::core::score::{ProfileScore, Tip};
use serde::Serialize;

pub const PRIORITY_TIPS: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPlan {
    pub timeframe: &'static str,
    pub priority: Vec<Tip>,
    pub potential_score: u8,
}

pub fn compute_improvement_plan(result: Option<&ProfileScore>) -> Option<ImprovementPlan> {
    let result = result?;
    let priority: Vec<Tip> = result.tips.iter().take(PRIORITY_TIPS).cloned().collect();
    let gain: u32 = priority.iter().map(|tip| tip.points).sum();
    let potential_score = (u32::from(result.score) + gain).min(100) as u8;

    Some(ImprovementPlan {
        timeframe: timeframe_for_score(result.score),
        priority,
        potential_score,
    })
}

pub fn timeframe_for_score(score: u8) -> &'static str {
    match score {
        75.. => "Ongoing",
        50..=74 => "2-4 weeks",
        _ => "1-2 months",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::score_insights;
    use crate::insights::Insights;
    use chrono::{TimeZone, Utc};

    #[test]
    fn absent_result_yields_none() {
        assert!(compute_improvement_plan(None).is_none());
    }

    #[test]
    fn plan_takes_top_three_tips() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut insights = Insights::default();
        insights.user.name = Some("A".to_string());
        let result = score_insights(&insights, now);

        let plan = compute_improvement_plan(Some(&result)).unwrap();
        assert_eq!(plan.timeframe, "1-2 months");
        assert_eq!(plan.priority.len(), PRIORITY_TIPS);
        assert_eq!(plan.priority, result.tips[..PRIORITY_TIPS].to_vec());
        assert_eq!(plan.potential_score, 35);
    }

    #[test]
    fn timeframe_buckets() {
        assert_eq!(timeframe_for_score(100), "Ongoing");
        assert_eq!(timeframe_for_score(75), "Ongoing");
        assert_eq!(timeframe_for_score(74), "2-4 weeks");
        assert_eq!(timeframe_for_score(50), "2-4 weeks");
        assert_eq!(timeframe_for_score(49), "1-2 months");
        assert_eq!(timeframe_for_score(0), "1-2 months");
    }
}
