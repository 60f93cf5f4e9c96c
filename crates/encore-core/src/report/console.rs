use crate::model::{PerformerResult, ScoreRow};

pub fn print_leaderboard(results: &[PerformerResult]) {
    if results.is_empty() {
        eprintln!("No scores recorded yet.");
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. {} ({:.1})",
            rank + 1,
            result.performer_name,
            result.total_score
        );
        for js in &result.judge_scores {
            let raw_sum =
                js.presentation + js.stage_presence + js.choreography + js.timing + js.performance;
            println!(
                "      judge {} ({}): {} x {:.1} = {:.1}",
                js.judge_id, js.judge_name, raw_sum, js.weight, js.weighted_score
            );
        }
    }
}

pub fn print_current_scores(rows: &[ScoreRow]) {
    if rows.is_empty() {
        eprintln!("No scores recorded yet.");
        return;
    }
    for row in rows {
        println!(
            "performer {} ({}) / judge {} ({}): {}",
            row.performer_id, row.performer_name, row.judge_id, row.judge_name, row.total_score
        );
    }
}
