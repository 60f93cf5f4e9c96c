use crate::errors::CoreError;
use crate::storage::Store;
use std::collections::HashSet;

/// The sequencing rule itself: a judge is unlocked iff every judge with a
/// smaller id has already scored the current performer. The lowest-id judge
/// has no predecessors and is always unlocked.
pub fn is_unlocked(judge_id: i64, judge_ids: &[i64], scored: &HashSet<i64>) -> bool {
    judge_ids
        .iter()
        .filter(|id| **id < judge_id)
        .all(|id| scored.contains(id))
}

/// Answers "may this judge score the performer currently being judged?".
/// Re-evaluated fresh on every call from a single store snapshot; new
/// submissions landing between polls change the answer, nothing is cached.
pub fn can_vote(store: &Store, judge_id: i64) -> Result<bool, CoreError> {
    let view = store.gate_view(judge_id)?;
    if !view.judge_exists {
        return Err(CoreError::JudgeNotFound);
    }
    if view.current_performer.is_none() {
        return Err(CoreError::NoActivePerformer);
    }
    Ok(is_unlocked(judge_id, &view.judge_ids, &view.scored))
}
