use encore_core::{aggregate, event, submit};
use serde_json::json;

mod common;

#[test]
fn weighted_totals_sum_per_judge_contributions() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0), (2, 2.0)], &[10])?;

    // Judge 1: sum 20 at weight 1.0; judge 2: sum 10 at weight 2.0.
    submit::submit_scores(&store, &common::submission(1, 10, 4))?;
    submit::submit_scores(&store, &common::submission(2, 10, 2))?;

    let results = aggregate::compute_final_scores(&store)?;
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.performer_id, 10);
    assert!((result.total_score - (20.0 * 1.0 + 10.0 * 2.0)).abs() < f64::EPSILON);

    assert_eq!(result.judge_scores.len(), 2);
    assert_eq!(result.judge_scores[0].judge_id, 1);
    assert_eq!(result.judge_scores[1].judge_id, 2);
    assert!((result.judge_scores[0].weighted_score - 20.0).abs() < f64::EPSILON);
    assert!((result.judge_scores[1].weighted_score - 20.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn performers_without_records_are_omitted() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10, 20, 30])?;
    submit::submit_scores(&store, &common::submission(1, 20, 3))?;

    let results = aggregate::compute_final_scores(&store)?;
    let ids: Vec<i64> = results.iter().map(|r| r.performer_id).collect();
    assert_eq!(ids, vec![20]);
    Ok(())
}

#[test]
fn leaderboard_sorts_descending_with_id_tiebreak() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10, 20, 30])?;

    // Performer 30 wins outright; 10 and 20 tie on total.
    submit::submit_scores(&store, &common::submission(1, 30, 5))?;
    submit::submit_scores(&store, &common::submission(1, 20, 3))?;
    submit::submit_scores(&store, &common::submission(1, 10, 3))?;

    let results = aggregate::compute_final_scores(&store)?;
    let ids: Vec<i64> = results.iter().map(|r| r.performer_id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
    Ok(())
}

#[test]
fn mixed_sub_scores_sum_correctly() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.5)], &[10])?;
    let sub: submit::ScoreSubmission = serde_json::from_value(json!({
        "judge_id": 1,
        "performer_id": 10,
        "scores": {
            "presentation": 1,
            "stage_presence": 2,
            "choreography": 3,
            "timing": 4,
            "performance": 5
        }
    }))?;
    submit::submit_scores(&store, &sub)?;

    let results = aggregate::compute_final_scores(&store)?;
    assert!((results[0].total_score - 15.0 * 1.5).abs() < f64::EPSILON);
    let js = &results[0].judge_scores[0];
    assert_eq!(
        (js.presentation, js.stage_presence, js.choreography, js.timing, js.performance),
        (1, 2, 3, 4, 5)
    );
    Ok(())
}

#[test]
fn current_scores_reports_flat_unweighted_rows() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0), (2, 3.0)], &[10, 20])?;
    submit::submit_scores(&store, &common::submission(1, 10, 2))?;
    submit::submit_scores(&store, &common::submission(2, 10, 5))?;
    submit::submit_scores(&store, &common::submission(1, 20, 4))?;

    let rows = aggregate::current_scores(&store)?;
    assert_eq!(rows.len(), 3);
    // Weight never leaks into the raw view.
    let judge2_row = rows
        .iter()
        .find(|r| r.judge_id == 2 && r.performer_id == 10)
        .expect("row present");
    assert_eq!(judge2_row.total_score, 25);
    Ok(())
}

#[test]
fn end_to_end_weighted_scenario() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0), (2, 2.0)], &[10])?;
    event::set_current_performer(&store, 10)?;

    assert_eq!(encore_core::gate::can_vote(&store, 2), Ok(false));
    submit::submit_scores(&store, &common::submission(1, 10, 5))?;
    assert_eq!(encore_core::gate::can_vote(&store, 2), Ok(true));
    submit::submit_scores(&store, &common::submission(2, 10, 1))?;

    let results = aggregate::compute_final_scores(&store)?;
    assert_eq!(results.len(), 1);
    assert!((results[0].total_score - 35.0).abs() < f64::EPSILON);
    Ok(())
}
