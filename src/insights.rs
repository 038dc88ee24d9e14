use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

const MILLIS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Aggregated GitHub profile and repository data, assembled upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Insights {
    #[serde(deserialize_with = "or_default")]
    pub user: UserProfile,
    #[serde(deserialize_with = "lenient_count")]
    pub repos_count: u64,
    #[serde(deserialize_with = "or_default")]
    pub languages: Languages,
    #[serde(deserialize_with = "lenient_pairs")]
    pub topics: Vec<(String, f64)>,
    #[serde(deserialize_with = "lenient_repos")]
    pub top_starred: Vec<StarredRepo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub blog: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub twitter_username: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub followers: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub following: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub public_gists: u64,
    #[serde(deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Languages {
    #[serde(deserialize_with = "lenient_pairs")]
    pub percentages: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarredRepo {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub stargazers_count: u64,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Insights {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed parsing insights JSON")
    }

    pub fn total_stars(&self) -> u64 {
        self.top_starred
            .iter()
            .map(|repo| repo.stargazers_count)
            .fold(0u64, |total, stars| total.saturating_add(stars))
    }

    pub fn described_repos(&self) -> usize {
        self.top_starred
            .iter()
            .filter(|repo| is_present(&repo.description))
            .count()
    }

    pub fn language_percentage(&self, language: &str) -> f64 {
        self.languages
            .percentages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, share)| *share)
            .unwrap_or(0.0)
    }

    /// Whole years between `created_at` and `now`; 0 when absent, unparseable or in the future.
    pub fn account_age_years(&self, now: DateTime<Utc>) -> u64 {
        let Some(created) = self
            .user
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        else {
            return 0;
        };

        let elapsed = now.signed_duration_since(created.with_timezone(&Utc));
        let years = elapsed.num_milliseconds() as f64 / MILLIS_PER_YEAR;
        if years <= 0.0 { 0 } else { years.floor() as u64 }
    }
}

/// Fields that hold only whitespace count as missing.
pub fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}

pub fn load_insights(path: &Path) -> Result<Insights> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading insights file {}", path.display()))?;
    Insights::from_json_str(&raw)
        .with_context(|| format!("failed parsing insights file {}", path.display()))
}

fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_count(&value))
}

fn lenient_pairs<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items.iter().map(pair_from_value).collect())
}

fn lenient_repos<'de, D>(deserializer: D) -> std::result::Result<Vec<StarredRepo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    // a malformed entry counts as a repository with no stars and no description
    Ok(items
        .into_iter()
        .map(|item| StarredRepo::deserialize(item).unwrap_or_default())
        .collect())
}

fn pair_from_value(value: &Value) -> (String, f64) {
    let Value::Array(parts) = value else {
        return (String::new(), 0.0);
    };

    let name = parts
        .first()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let share = parts
        .get(1)
        .and_then(Value::as_f64)
        .filter(|share| share.is_finite() && *share > 0.0)
        .unwrap_or(0.0);

    (name, share)
}

fn value_as_count(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.is_finite() && *n > 0.0)
                    .map(|n| n.floor() as u64)
            })
            .unwrap_or(0),
        _ => 0,
    }
}
