use chrono::NaiveDate;

use fitplan::models::WorkoutLog;
use fitplan::stats::{best_scores, group_by_session, is_personal_record, one_rep_max};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn log(date_str: &str, exercise_id: &str, weight: f64, reps: i32) -> WorkoutLog {
    log_for_plan(date_str, "Push Day", exercise_id, weight, reps)
}

fn log_for_plan(
    date_str: &str,
    plan_name: &str,
    exercise_id: &str,
    weight: f64,
    reps: i32,
) -> WorkoutLog {
    WorkoutLog {
        id: format!("{exercise_id}-{date_str}-{weight}"),
        date: date(date_str),
        exercise_id: exercise_id.to_string(),
        exercise_name: format!("Exercise {exercise_id}"),
        weight,
        reps,
        sets: 3,
        plan_name: plan_name.to_string(),
    }
}

#[test]
fn test_one_rep_max_follows_epley() {
    // 100 × (1 + 5/30) = 116.67 → 117
    assert_eq!(one_rep_max(100.0, 5), 117.0);
    // Zero reps estimates the weight itself
    assert_eq!(one_rep_max(100.0, 0), 100.0);
    // 105 × 1.1 = 115.5 → 116
    assert_eq!(one_rep_max(105.0, 3), 116.0);
}

#[test]
fn test_personal_record_compares_estimated_max_not_raw_weight() {
    // 105×3 estimates 116, the standing 100×5 estimates 117
    assert!(!is_personal_record(105.0, 3, 100.0, 5));
    // 110×5 estimates 128, beating 117
    assert!(is_personal_record(110.0, 5, 100.0, 5));
    // An equal estimate is not a record
    assert!(!is_personal_record(100.0, 5, 100.0, 5));
}

#[test]
fn test_best_scores_one_entry_per_exercise_with_max_weight() {
    let logs = vec![
        log("2024-01-10", "bench", 100.0, 5),
        log("2024-01-20", "bench", 110.0, 3),
        log("2024-01-10", "squat", 60.0, 10),
        log("2024-01-20", "squat", 55.0, 12),
    ];

    let scores = best_scores(&logs);

    assert_eq!(scores.len(), 2);
    let bench = scores.iter().find(|s| s.exercise_id == "bench").unwrap();
    assert_eq!(bench.weight, 110.0);
    // Reps and date travel with the winning log
    assert_eq!(bench.reps, 3);
    assert_eq!(bench.date, date("2024-01-20"));

    let squat = scores.iter().find(|s| s.exercise_id == "squat").unwrap();
    assert_eq!(squat.weight, 60.0);
    assert_eq!(squat.reps, 10);
}

#[test]
fn test_best_scores_tie_keeps_first_seen_log() {
    let logs = vec![
        log("2024-01-10", "bench", 100.0, 5),
        log("2024-01-20", "bench", 100.0, 8),
    ];

    let scores = best_scores(&logs);

    assert_eq!(scores.len(), 1);
    // Equal weight does not replace the incumbent
    assert_eq!(scores[0].reps, 5);
    assert_eq!(scores[0].date, date("2024-01-10"));
}

#[test]
fn test_best_scores_preserve_first_seen_exercise_order() {
    let logs = vec![
        log("2024-01-10", "squat", 60.0, 10),
        log("2024-01-10", "bench", 100.0, 5),
        log("2024-01-20", "squat", 80.0, 8),
    ];

    let scores = best_scores(&logs);

    let order: Vec<&str> = scores.iter().map(|s| s.exercise_id.as_str()).collect();
    assert_eq!(order, ["squat", "bench"]);
}

#[test]
fn test_grouping_preserves_every_log() {
    let logs = vec![
        log_for_plan("2024-01-10", "Push Day", "bench", 100.0, 5),
        log_for_plan("2024-01-10", "Push Day", "ohp", 50.0, 8),
        log_for_plan("2024-01-12", "Pull Day", "row", 70.0, 10),
        log_for_plan("2024-01-12", "Pull Day", "curl", 20.0, 12),
        log_for_plan("2024-01-14", "Push Day", "bench", 102.5, 5),
    ];

    let groups = group_by_session(&logs, None);

    let flattened: Vec<&WorkoutLog> = groups.iter().flat_map(|g| &g.exercises).collect();
    assert_eq!(flattened.len(), logs.len());

    let mut input_ids: Vec<&str> = logs.iter().map(|l| l.id.as_str()).collect();
    let mut output_ids: Vec<&str> = flattened.iter().map(|l| l.id.as_str()).collect();
    input_ids.sort_unstable();
    output_ids.sort_unstable();
    assert_eq!(input_ids, output_ids);
}

#[test]
fn test_grouping_sorts_dates_newest_first() {
    let logs = vec![
        log("2024-01-01", "bench", 100.0, 5),
        log("2024-01-03", "bench", 102.5, 5),
        log("2024-01-02", "bench", 101.0, 5),
    ];

    let groups = group_by_session(&logs, None);

    let dates: Vec<NaiveDate> = groups.iter().map(|g| g.date).collect();
    assert_eq!(
        dates,
        [
            date("2024-01-03"),
            date("2024-01-02"),
            date("2024-01-01"),
        ]
    );
}

#[test]
fn test_grouping_splits_same_date_by_plan() {
    let logs = vec![
        log_for_plan("2024-01-10", "Push Day", "bench", 100.0, 5),
        log_for_plan("2024-01-10", "Pull Day", "row", 70.0, 10),
        log_for_plan("2024-01-10", "Push Day", "ohp", 50.0, 8),
    ];

    let groups = group_by_session(&logs, None);

    assert_eq!(groups.len(), 2);
    let push = groups.iter().find(|g| g.plan_name == "Push Day").unwrap();
    assert_eq!(push.exercises.len(), 2);
    // Relative order within the group survives grouping
    assert_eq!(push.exercises[0].exercise_id, "bench");
    assert_eq!(push.exercises[1].exercise_id, "ohp");
}

#[test]
fn test_grouping_honors_group_cap() {
    let logs = vec![
        log("2024-01-01", "bench", 100.0, 5),
        log("2024-01-02", "bench", 101.0, 5),
        log("2024-01-03", "bench", 102.0, 5),
    ];

    let groups = group_by_session(&logs, Some(2));

    assert_eq!(groups.len(), 2);
    // The cap keeps the newest groups
    assert_eq!(groups[0].date, date("2024-01-03"));
    assert_eq!(groups[1].date, date("2024-01-02"));
}
