use serde::{Deserialize, Serialize};

use crate::domain::{Team, TeamId};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// One line of the league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub id: TeamId,
    pub name: String,
    pub city: Option<String>,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

impl StandingsRow {
    pub fn empty(team: &Team) -> Self {
        Self {
            id: team.team_id,
            name: team.name.clone(),
            city: team.city.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
        }
    }

    pub fn record_win(&mut self) {
        self.played += 1;
        self.wins += 1;
        self.points += POINTS_FOR_WIN;
    }

    pub fn record_draw(&mut self) {
        self.played += 1;
        self.draws += 1;
        self.points += POINTS_FOR_DRAW;
    }

    pub fn record_loss(&mut self) {
        self.played += 1;
        self.losses += 1;
    }
}

/// Outcome of a completed match from the home side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn from_scores(home_score: i32, away_score: i32) -> Self {
        match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}
