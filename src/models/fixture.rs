//! Match (fixture), Scoreline and Stage.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a match: `t1-r{round}-p{slot}`, `t2-r{round}-p{slot}` or `final`.
pub type MatchId = String;

/// Which part of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Turno: rounds 1-3.
    FirstLeg,
    /// Returno: rounds 4-6, home and away swapped.
    SecondLeg,
    Final,
}

/// Goals scored by both sides. Both are always known together.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: u32,
    pub away: u32,
}

impl Scoreline {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Build a scoreline only when both sides are set.
    pub fn from_pair(home: Option<u32>, away: Option<u32>) -> Option<Self> {
        Some(Self::new(home?, away?))
    }
}

/// A single match between a home and an away team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// None if not yet played.
    pub score: Option<Scoreline>,
    /// 1-indexed; 1-3 first leg, 4-6 second leg, 7 final.
    pub round: u32,
    pub stage: Stage,
}

impl Match {
    pub fn new(
        id: impl Into<MatchId>,
        home_team_id: TeamId,
        away_team_id: TeamId,
        round: u32,
        stage: Stage,
    ) -> Self {
        Self {
            id: id.into(),
            home_team_id,
            away_team_id,
            score: None,
            round,
            stage,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    pub fn is_second_leg(&self) -> bool {
        self.stage == Stage::SecondLeg
    }

    pub fn is_final(&self) -> bool {
        self.stage == Stage::Final
    }

    pub fn home_score(&self) -> Option<u32> {
        self.score.map(|s| s.home)
    }

    pub fn away_score(&self) -> Option<u32> {
        self.score.map(|s| s.away)
    }
}
