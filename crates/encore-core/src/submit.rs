use crate::errors::CoreError;
use crate::model::{ScoreRecord, ScoreSheet};
use crate::storage::Store;
use serde::Deserialize;
use serde_json::Value;

/// Raw submission payload as it arrives from the transport. Ids and scores
/// stay loose (`Value`) until validation so each failure maps to its own
/// rejection reason instead of one opaque deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub judge_id: Option<Value>,
    #[serde(default)]
    pub performer_id: Option<Value>,
    #[serde(default)]
    pub scores: RawScores,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScores {
    #[serde(default)]
    pub presentation: Option<Value>,
    #[serde(default)]
    pub stage_presence: Option<Value>,
    #[serde(default)]
    pub choreography: Option<Value>,
    #[serde(default)]
    pub timing: Option<Value>,
    #[serde(default)]
    pub performance: Option<Value>,
}

impl RawScores {
    fn values(&self) -> [&Option<Value>; 5] {
        [
            &self.presentation,
            &self.stage_presence,
            &self.choreography,
            &self.timing,
            &self.performance,
        ]
    }
}

/// Accepts JSON integers and integer strings. Fractional numbers are rejected
/// rather than truncated.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn coerce_id(value: Option<&Value>, field: &str) -> Result<i64, CoreError> {
    let value =
        value.ok_or_else(|| CoreError::InvalidInput(format!("{field} is required")))?;
    coerce_int(value)
        .ok_or_else(|| CoreError::InvalidInput(format!("{field} must be an integer")))
}

/// Validates and persists one submission. Checks run in a fixed order and the
/// first failure wins: ids, entity existence, duplicate, score presence,
/// score type, score range. On success exactly one record is inserted.
pub fn submit_scores(store: &Store, submission: &ScoreSubmission) -> Result<ScoreRecord, CoreError> {
    let judge_id = coerce_id(submission.judge_id.as_ref(), "judge_id")?;
    let performer_id = coerce_id(submission.performer_id.as_ref(), "performer_id")?;

    if !store.judge_exists(judge_id)? {
        return Err(CoreError::JudgeNotFound);
    }
    if !store.performer_exists(performer_id)? {
        return Err(CoreError::PerformerNotFound);
    }
    if store.has_score(judge_id, performer_id)? {
        return Err(CoreError::DuplicateSubmission);
    }

    let sheet = validate_sheet(&submission.scores)?;
    let record = ScoreRecord {
        judge_id,
        performer_id,
        sheet,
    };
    store.insert_score(&record)?;
    tracing::debug!(event = "score_recorded", judge_id, performer_id);
    Ok(record)
}

fn validate_sheet(raw: &RawScores) -> Result<ScoreSheet, CoreError> {
    let values = raw.values();
    if values.iter().any(|v| v.is_none()) {
        return Err(CoreError::MissingScores);
    }

    let mut coerced = [0i64; 5];
    for (slot, value) in coerced.iter_mut().zip(values.iter()) {
        let value = value.as_ref().ok_or(CoreError::MissingScores)?;
        *slot = coerce_int(value).ok_or(CoreError::NonIntegerScore)?;
    }

    if coerced
        .iter()
        .any(|v| !(ScoreSheet::MIN..=ScoreSheet::MAX).contains(v))
    {
        return Err(CoreError::ScoreOutOfRange);
    }

    Ok(ScoreSheet {
        presentation: coerced[0],
        stage_presence: coerced[1],
        choreography: coerced[2],
        timing: coerced[3],
        performance: coerced[4],
    })
}
