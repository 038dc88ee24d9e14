use crate::insights::{Insights, is_present};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::fmt;

pub const MAX_TIPS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Profile,
    Repositories,
    Skills,
    Community,
    Activity,
}

impl ScoreCategory {
    pub const ALL: [Self; 5] = [
        Self::Profile,
        Self::Repositories,
        Self::Skills,
        Self::Community,
        Self::Activity,
    ];

    pub fn max_points(self) -> u32 {
        match self {
            Self::Profile => 20,
            Self::Repositories => 30,
            Self::Skills => 20,
            Self::Community => 15,
            Self::Activity => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Repositories => "repositories",
            Self::Skills => "skills",
            Self::Community => "community",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => write!(f, "Profile"),
            Self::Repositories => write!(f, "Repositories"),
            Self::Skills => write!(f, "Skills"),
            Self::Community => write!(f, "Community"),
            Self::Activity => write!(f, "Activity"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Beginner,
    Developing,
    Average,
    Good,
    Excellent,
    Exceptional,
}

impl Rating {
    pub fn for_score(score: u8) -> Self {
        match score {
            90.. => Self::Exceptional,
            75..=89 => Self::Excellent,
            60..=74 => Self::Good,
            40..=59 => Self::Average,
            20..=39 => Self::Developing,
            _ => Self::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Developing => "Developing",
            Self::Beginner => "Beginner",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Exceptional => "#8b5cf6",
            Self::Excellent => "#10b981",
            Self::Good => "#3b82f6",
            Self::Average => "#f59e0b",
            Self::Developing => "#f97316",
            Self::Beginner => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Exceptional => "🏆",
            Self::Excellent => "🌟",
            Self::Good => "👍",
            Self::Average => "📈",
            Self::Developing => "🌱",
            Self::Beginner => "🔰",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Tip {
    pub category: ScoreCategory,
    pub tip: String,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SubScores {
    pub profile: u32,
    pub repositories: u32,
    pub skills: u32,
    pub community: u32,
    pub activity: u32,
}

impl SubScores {
    pub fn get(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Profile => self.profile,
            ScoreCategory::Repositories => self.repositories,
            ScoreCategory::Skills => self.skills,
            ScoreCategory::Community => self.community,
            ScoreCategory::Activity => self.activity,
        }
    }

    pub fn total(&self) -> u32 {
        ScoreCategory::ALL.iter().map(|category| self.get(*category)).sum()
    }
}

/// Percentage of each category's maximum that was earned.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Breakdown {
    pub profile: u8,
    pub repositories: u8,
    pub skills: u8,
    pub community: u8,
    pub activity: u8,
}

impl Breakdown {
    fn from_sub_scores(sub: &SubScores) -> Self {
        let pct = |category: ScoreCategory| {
            let max = category.max_points();
            let earned = sub.get(category).min(max);
            (f64::from(earned) / f64::from(max) * 100.0).round() as u8
        };

        Self {
            profile: pct(ScoreCategory::Profile),
            repositories: pct(ScoreCategory::Repositories),
            skills: pct(ScoreCategory::Skills),
            community: pct(ScoreCategory::Community),
            activity: pct(ScoreCategory::Activity),
        }
    }

    pub fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Profile => self.profile,
            ScoreCategory::Repositories => self.repositories,
            ScoreCategory::Skills => self.skills,
            ScoreCategory::Community => self.community,
            ScoreCategory::Activity => self.activity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScore {
    pub score: u8,
    pub rating: Rating,
    pub rating_color: &'static str,
    pub rating_icon: &'static str,
    pub breakdown: Breakdown,
    pub sub_scores: SubScores,
    pub achievements: Vec<String>,
    pub tips: Vec<Tip>,
}

/// Accumulates awards for one category: earned points, achievements and
/// remaining-point tips.
struct Ledger<'a> {
    category: ScoreCategory,
    earned: u32,
    achievements: &'a mut Vec<String>,
    tips: &'a mut Vec<Tip>,
}

impl<'a> Ledger<'a> {
    fn new(
        category: ScoreCategory,
        achievements: &'a mut Vec<String>,
        tips: &'a mut Vec<Tip>,
    ) -> Self {
        Self {
            category,
            earned: 0,
            achievements,
            tips,
        }
    }

    fn award(&mut self, points: u32, max: u32, achievement: &str, tip: &str) {
        let points = points.min(max);
        self.earned += points;
        if points == max {
            self.achievements.push(achievement.to_string());
        } else {
            self.tips.push(Tip {
                category: self.category,
                tip: tip.to_string(),
                points: max - points,
            });
        }
    }

    fn finish(self) -> u32 {
        self.earned.min(self.category.max_points())
    }
}

pub fn compute_profile_score(
    insights: Option<&Insights>,
    now: DateTime<Utc>,
) -> Option<ProfileScore> {
    insights.map(|insights| score_insights(insights, now))
}

pub fn score_insights(insights: &Insights, now: DateTime<Utc>) -> ProfileScore {
    let mut achievements = Vec::new();
    let mut tips = Vec::new();

    let sub_scores = SubScores {
        profile: profile_completeness(insights, &mut achievements, &mut tips),
        repositories: repository_quality(insights, &mut achievements, &mut tips),
        skills: skill_diversity(insights, &mut achievements, &mut tips),
        community: community_engagement(insights, &mut achievements, &mut tips),
        activity: activity_consistency(insights, now, &mut achievements, &mut tips),
    };
    debug!("sub-scores: {sub_scores:?}");

    // sort_by is stable: equal-point tips keep encounter order
    tips.sort_by(|a, b| b.points.cmp(&a.points));
    tips.truncate(MAX_TIPS);

    let score = sub_scores.total().min(100) as u8;
    let rating = Rating::for_score(score);

    ProfileScore {
        score,
        rating,
        rating_color: rating.color(),
        rating_icon: rating.icon(),
        breakdown: Breakdown::from_sub_scores(&sub_scores),
        sub_scores,
        achievements,
        tips,
    }
}

fn profile_completeness(
    insights: &Insights,
    achievements: &mut Vec<String>,
    tips: &mut Vec<Tip>,
) -> u32 {
    let user = &insights.user;
    let fields = [
        (&user.name, 5, "Profile has a display name", "Add your full name to your profile"),
        (&user.bio, 5, "Profile has a bio", "Write a short bio describing what you build"),
        (&user.location, 3, "Location is listed", "Add your location to your profile"),
        (&user.company, 3, "Company is listed", "Add your company or organization"),
        (&user.blog, 2, "Website or blog is linked", "Link a personal website or blog"),
        (&user.twitter_username, 2, "Twitter account is linked", "Connect your Twitter/X account"),
    ];

    let mut ledger = Ledger::new(ScoreCategory::Profile, achievements, tips);
    for (field, points, achievement, tip) in fields {
        let earned = if is_present(field) { points } else { 0 };
        ledger.award(earned, points, achievement, tip);
    }
    ledger.finish()
}

fn repository_quality(
    insights: &Insights,
    achievements: &mut Vec<String>,
    tips: &mut Vec<Tip>,
) -> u32 {
    let mut ledger = Ledger::new(ScoreCategory::Repositories, achievements, tips);

    let repo_points = insights.repos_count.min(10) as u32;
    ledger.award(
        repo_points,
        10,
        "10+ public repositories",
        "Publish more public repositories (aim for 10+)",
    );

    ledger.award(
        star_points(insights.total_stars()),
        10,
        "100+ stars across top repositories",
        "Build projects others want to star (aim for 100+ stars)",
    );

    let described = insights.described_repos().min(5) as u32;
    ledger.award(
        described * 2,
        10,
        "Top repositories have descriptions",
        "Add descriptions to your top repositories",
    );

    ledger.finish()
}

fn star_points(total_stars: u64) -> u32 {
    match total_stars {
        100.. => 10,
        50..=99 => 7,
        10..=49 => 5,
        stars => (stars / 10) as u32,
    }
}

fn skill_diversity(
    insights: &Insights,
    achievements: &mut Vec<String>,
    tips: &mut Vec<Tip>,
) -> u32 {
    let mut ledger = Ledger::new(ScoreCategory::Skills, achievements, tips);

    let languages = insights.languages.percentages.len().min(5) as u32;
    ledger.award(
        languages * 2,
        10,
        "Works across 5+ languages",
        "Explore more programming languages (aim for 5+)",
    );

    let topics = insights.topics.len().min(10) as u32;
    ledger.award(
        topics,
        10,
        "Repositories cover 10+ topics",
        "Tag your repositories with topics (aim for 10+)",
    );

    ledger.finish()
}

fn community_engagement(
    insights: &Insights,
    achievements: &mut Vec<String>,
    tips: &mut Vec<Tip>,
) -> u32 {
    let user = &insights.user;
    let mut ledger = Ledger::new(ScoreCategory::Community, achievements, tips);

    ledger.award(
        follower_points(user.followers),
        8,
        "100+ followers",
        "Grow your audience by sharing your work (aim for 100+ followers)",
    );

    let following = (user.following.min(20) * 4 / 20) as u32;
    ledger.award(
        following,
        4,
        "Follows 20+ developers",
        "Follow developers whose work interests you",
    );

    let gists = (user.public_gists.min(5) * 3 / 5) as u32;
    ledger.award(
        gists,
        3,
        "Shares 5+ public gists",
        "Share useful snippets as public gists",
    );

    ledger.finish()
}

fn follower_points(followers: u64) -> u32 {
    match followers {
        100.. => 8,
        50..=99 => 6,
        10..=49 => 4,
        count => (count * 8 / 100) as u32,
    }
}

fn activity_consistency(
    insights: &Insights,
    now: DateTime<Utc>,
    achievements: &mut Vec<String>,
    tips: &mut Vec<Tip>,
) -> u32 {
    let age_years = insights.account_age_years(now);
    let mut ledger = Ledger::new(ScoreCategory::Activity, achievements, tips);

    let age_points = (age_years.min(2) * 5 / 2) as u32;
    ledger.award(
        age_points,
        5,
        "Account is 2+ years old",
        "Keep building; account age grows your activity score",
    );

    let consistency = if insights.repos_count > 0 && age_years > 0 {
        let repos_per_year = insights.repos_count as f64 / age_years.max(1) as f64;
        (repos_per_year.min(5.0) / 5.0 * 10.0).floor() as u32
    } else {
        0
    };
    ledger.award(
        consistency,
        10,
        "Ships 5+ repositories per year",
        "Publish projects consistently (aim for 5+ repositories per year)",
    );

    ledger.finish()
}
