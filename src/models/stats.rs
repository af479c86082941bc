//! Derived per-team statistics.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

pub const POINTS_PER_WIN: u32 = 3;
pub const POINTS_PER_DRAW: u32 = 1;

/// Aggregate results of one team over the scored group matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    /// Sums of per-match u32 scores.
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
    /// Percentage of the points available from matches played, 0 when nothing played.
    pub efficiency: f64,
}

impl TeamStats {
    /// Zeroed stats for a team that has not played yet.
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            efficiency: 0.0,
        }
    }

    /// Fold one played match from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_PER_WIN;
            }
            std::cmp::Ordering::Less => self.lost += 1,
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_PER_DRAW;
            }
        }
    }

    /// Fill in goal difference and efficiency from the counters.
    pub fn finalize(&mut self) {
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;
        self.efficiency = if self.played > 0 {
            f64::from(self.points) / (f64::from(self.played) * f64::from(POINTS_PER_WIN)) * 100.0
        } else {
            0.0
        };
    }

    pub fn tier(&self) -> EfficiencyTier {
        EfficiencyTier::from_efficiency(self.efficiency)
    }
}

/// Coarse label for an efficiency percentage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    /// 70% or more.
    Hot,
    /// 40% up to 70%.
    Steady,
    Struggling,
}

impl EfficiencyTier {
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency >= 70.0 {
            EfficiencyTier::Hot
        } else if efficiency >= 40.0 {
            EfficiencyTier::Steady
        } else {
            EfficiencyTier::Struggling
        }
    }
}
