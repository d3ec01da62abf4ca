use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub type TeamId = i64;
pub type MatchId = i64;

/// Team as stored in the results database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Match row as served by `/api/matches`, with team names joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: MatchId,
    #[serde(default, deserialize_with = "deserialize_match_date")]
    pub match_date: Option<NaiveDate>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
}

/// Name to show for a team, `"Team <id>"` when the join found nothing
pub fn team_label(name: Option<&str>, team_id: TeamId) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Team {team_id}"),
    }
}

/// Unplayed sides count as 0 wherever a number is required
pub fn score_or_zero(score: Option<i32>) -> i32 {
    score.unwrap_or(0)
}

impl MatchRow {
    pub fn home_team_label(&self) -> String {
        team_label(self.home_team.as_deref(), self.home_team_id)
    }

    pub fn away_team_label(&self) -> String {
        team_label(self.away_team.as_deref(), self.away_team_id)
    }

    pub fn score_diff(&self) -> i64 {
        i64::from(score_or_zero(self.home_score)) - i64::from(score_or_zero(self.away_score))
    }

    pub fn result(&self) -> MatchResult {
        MatchResult {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_score: self.home_score,
            away_score: self.away_score,
        }
    }
}

/// Just the scoring part of a match, which is all the standings need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl MatchResult {
    /// Both scores, or `None` while the match is unplayed
    pub fn final_score(&self) -> Option<(i32, i32)> {
        Some((self.home_score?, self.away_score?))
    }
}

/// Accepts `2024-03-02` as well as `2024-03-02T00:00:00.000Z` and keeps the date part.
fn deserialize_match_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(serde::de::Error::custom)
}
