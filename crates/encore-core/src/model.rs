use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judge {
    pub judge_id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub weight: f64,
}

/// A judge as returned to clients: never carries the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeProfile {
    pub judge_id: i64,
    pub name: String,
    pub email: String,
    pub weight: f64,
}

impl From<Judge> for JudgeProfile {
    fn from(j: Judge) -> Self {
        Self {
            judge_id: j.judge_id,
            name: j.name,
            email: j.email,
            weight: j.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeSummary {
    pub judge_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub id: i64,
    pub name: String,
}

/// One judge's five sub-scores for one performer. Every value is constrained
/// to [`ScoreSheet::MIN`, `ScoreSheet::MAX`] by the submission validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub presentation: i64,
    pub stage_presence: i64,
    pub choreography: i64,
    pub timing: i64,
    pub performance: i64,
}

impl ScoreSheet {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn values(&self) -> [i64; 5] {
        [
            self.presentation,
            self.stage_presence,
            self.choreography,
            self.timing,
            self.performance,
        ]
    }

    pub fn sum(&self) -> i64 {
        self.values().iter().sum()
    }
}

/// A validated (judge, performer) submission. At most one record per pair may
/// ever exist in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub judge_id: i64,
    pub performer_id: i64,
    pub sheet: ScoreSheet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeScore {
    pub judge_id: i64,
    pub judge_name: String,
    pub presentation: i64,
    pub stage_presence: i64,
    pub choreography: i64,
    pub timing: i64,
    pub performance: i64,
    pub weight: f64,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerResult {
    pub performer_id: i64,
    pub performer_name: String,
    pub total_score: f64,
    pub judge_scores: Vec<JudgeScore>,
}

/// Flat unweighted row for the live raw-scores view, distinct from the final
/// weighted leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub performer_id: i64,
    pub performer_name: String,
    pub judge_id: i64,
    pub judge_name: String,
    pub total_score: i64,
}
