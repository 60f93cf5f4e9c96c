use encore_core::model::{Judge, Performer};
use encore_core::storage::Store;
use serde_json::json;

pub fn judge(judge_id: i64, weight: f64) -> Judge {
    Judge {
        judge_id,
        name: format!("judge-{judge_id}"),
        email: format!("judge{judge_id}@example.com"),
        password: format!("pw{judge_id}"),
        weight,
    }
}

pub fn performer(id: i64) -> Performer {
    Performer {
        id,
        name: format!("performer-{id}"),
    }
}

/// In-memory store seeded with the given judges and performers.
pub fn store_with(judges: &[(i64, f64)], performers: &[i64]) -> anyhow::Result<Store> {
    let store = Store::memory()?;
    store.init_schema()?;
    for (id, weight) in judges {
        store.upsert_judge(&judge(*id, *weight))?;
    }
    for id in performers {
        store.upsert_performer(&performer(*id))?;
    }
    Ok(store)
}

pub fn submission(
    judge_id: i64,
    performer_id: i64,
    score: i64,
) -> encore_core::submit::ScoreSubmission {
    serde_json::from_value(json!({
        "judge_id": judge_id,
        "performer_id": performer_id,
        "scores": {
            "presentation": score,
            "stage_presence": score,
            "choreography": score,
            "timing": score,
            "performance": score
        }
    }))
    .expect("well-formed submission payload")
}
