use encore_core::errors::CoreError;
use encore_core::model::{ScoreRecord, ScoreSheet};
use encore_core::submit::{self, ScoreSubmission};
use serde_json::json;

mod common;

fn parse(payload: serde_json::Value) -> ScoreSubmission {
    serde_json::from_value(payload).expect("payload deserializes")
}

#[test]
fn missing_and_malformed_ids_are_invalid_input() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;

    let missing = parse(json!({ "performer_id": 10, "scores": {} }));
    assert!(matches!(
        submit::submit_scores(&store, &missing),
        Err(CoreError::InvalidInput(_))
    ));

    let malformed = parse(json!({ "judge_id": "abc", "performer_id": 10, "scores": {} }));
    assert!(matches!(
        submit::submit_scores(&store, &malformed),
        Err(CoreError::InvalidInput(_))
    ));
    Ok(())
}

#[test]
fn unknown_entities_are_reported_separately() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;

    let unknown_judge = common::submission(9, 10, 3);
    assert_eq!(
        submit::submit_scores(&store, &unknown_judge),
        Err(CoreError::JudgeNotFound)
    );

    let unknown_performer = common::submission(1, 99, 3);
    assert_eq!(
        submit::submit_scores(&store, &unknown_performer),
        Err(CoreError::PerformerNotFound)
    );
    Ok(())
}

#[test]
fn entity_checks_outrank_score_checks() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    // Both the judge and the scores are bad: the judge check wins.
    let sub = parse(json!({
        "judge_id": 9,
        "performer_id": 10,
        "scores": { "presentation": 99 }
    }));
    assert_eq!(
        submit::submit_scores(&store, &sub),
        Err(CoreError::JudgeNotFound)
    );
    Ok(())
}

#[test]
fn duplicate_submission_is_a_conflict_and_keeps_one_record() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;

    submit::submit_scores(&store, &common::submission(1, 10, 4))?;
    assert_eq!(
        submit::submit_scores(&store, &common::submission(1, 10, 2)),
        Err(CoreError::DuplicateSubmission)
    );
    assert_eq!(store.count_scores()?, 1);

    // Same judge, different performer is fine.
    store.upsert_performer(&common::performer(20))?;
    submit::submit_scores(&store, &common::submission(1, 20, 2))?;
    assert_eq!(store.count_scores()?, 2);
    Ok(())
}

#[test]
fn store_level_insert_backstops_the_duplicate_check() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    let record = ScoreRecord {
        judge_id: 1,
        performer_id: 10,
        sheet: ScoreSheet {
            presentation: 3,
            stage_presence: 3,
            choreography: 3,
            timing: 3,
            performance: 3,
        },
    };
    store.insert_score(&record)?;
    // A second writer racing past the validator still loses here.
    assert_eq!(
        store.insert_score(&record),
        Err(CoreError::DuplicateSubmission)
    );
    assert_eq!(store.count_scores()?, 1);
    Ok(())
}

#[test]
fn incomplete_score_sheets_are_rejected() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    let sub = parse(json!({
        "judge_id": 1,
        "performer_id": 10,
        "scores": {
            "presentation": 3,
            "stage_presence": 3,
            "choreography": 3,
            "timing": 3
        }
    }));
    assert_eq!(
        submit::submit_scores(&store, &sub),
        Err(CoreError::MissingScores)
    );
    assert_eq!(store.count_scores()?, 0);
    Ok(())
}

#[test]
fn non_integer_scores_are_rejected_and_never_persisted() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    for bad in [json!(3.5), json!("3.5"), json!("high"), json!([3])] {
        let sub = parse(json!({
            "judge_id": 1,
            "performer_id": 10,
            "scores": {
                "presentation": bad,
                "stage_presence": 3,
                "choreography": 3,
                "timing": 3,
                "performance": 3
            }
        }));
        assert_eq!(
            submit::submit_scores(&store, &sub),
            Err(CoreError::NonIntegerScore)
        );
    }
    assert_eq!(store.count_scores()?, 0);
    Ok(())
}

#[test]
fn out_of_range_scores_are_rejected_and_never_persisted() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    for bad in [0, 6, -1, 100] {
        let sub = parse(json!({
            "judge_id": 1,
            "performer_id": 10,
            "scores": {
                "presentation": 5,
                "stage_presence": 5,
                "choreography": 5,
                "timing": 5,
                "performance": bad
            }
        }));
        assert_eq!(
            submit::submit_scores(&store, &sub),
            Err(CoreError::ScoreOutOfRange)
        );
    }
    assert_eq!(store.count_scores()?, 0);
    Ok(())
}

#[test]
fn boundary_scores_and_string_integers_are_accepted() -> anyhow::Result<()> {
    let store = common::store_with(&[(1, 1.0)], &[10])?;
    let sub = parse(json!({
        "judge_id": "1",
        "performer_id": 10,
        "scores": {
            "presentation": 1,
            "stage_presence": "5",
            "choreography": 1,
            "timing": 5,
            "performance": "1"
        }
    }));
    let record = submit::submit_scores(&store, &sub)?;
    assert_eq!(record.sheet.presentation, 1);
    assert_eq!(record.sheet.stage_presence, 5);
    assert_eq!(record.sheet.sum(), 13);
    Ok(())
}
