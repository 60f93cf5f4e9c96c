use crate::errors::CoreError;
use crate::model::{JudgeScore, PerformerResult, ScoreRow};
use crate::storage::Store;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Computes the final weighted leaderboard. Per judge: sum of the five
/// sub-scores times that judge's weight; per performer: sum of the per-judge
/// weighted scores. Sorted by total descending, ties broken by performer id
/// ascending. Performers with no records are omitted, not zero-scored.
pub fn compute_final_scores(store: &Store) -> Result<Vec<PerformerResult>, CoreError> {
    let rows = store.score_rows()?;

    let mut by_performer: BTreeMap<i64, PerformerResult> = BTreeMap::new();
    for row in rows {
        let weighted_score = row.sheet.sum() as f64 * row.weight;
        let entry = by_performer
            .entry(row.performer_id)
            .or_insert_with(|| PerformerResult {
                performer_id: row.performer_id,
                performer_name: row.performer_name.clone(),
                total_score: 0.0,
                judge_scores: Vec::new(),
            });
        entry.total_score += weighted_score;
        // Rows arrive ordered by judge_id, so breakdowns stay ascending.
        entry.judge_scores.push(JudgeScore {
            judge_id: row.judge_id,
            judge_name: row.judge_name,
            presentation: row.sheet.presentation,
            stage_presence: row.sheet.stage_presence,
            choreography: row.sheet.choreography,
            timing: row.sheet.timing,
            performance: row.sheet.performance,
            weight: row.weight,
            weighted_score,
        });
    }

    let mut results: Vec<PerformerResult> = by_performer.into_values().collect();
    results.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
            .then(a.performer_id.cmp(&b.performer_id))
    });
    Ok(results)
}

/// The live unweighted view: one row per stored (judge, performer) pair with
/// the plain sub-score sum. Distinct from the final weighted leaderboard.
pub fn current_scores(store: &Store) -> Result<Vec<ScoreRow>, CoreError> {
    let rows = store.score_rows()?;
    Ok(rows
        .into_iter()
        .map(|row| ScoreRow {
            performer_id: row.performer_id,
            performer_name: row.performer_name,
            judge_id: row.judge_id,
            judge_name: row.judge_name,
            total_score: row.sheet.sum(),
        })
        .collect())
}
