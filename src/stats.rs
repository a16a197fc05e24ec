//! Pure transformations over workout history: session grouping, best
//! scores, and the Epley one-rep-max estimate. Everything here works on
//! fully-loaded in-memory collections; there is no incremental state.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{BestScore, WorkoutLog};

/// The logs performed on one date under one plan, in their original
/// relative order.
#[derive(Debug, Clone)]
pub struct WorkoutGroup {
    pub date: NaiveDate,
    pub plan_name: String,
    pub exercises: Vec<WorkoutLog>,
}

/// Groups logs by (date, plan name) and orders the groups by date,
/// newest first. Grouping is first-seen ordered, and the sort is
/// stable, so same-date groups keep their first-seen order. Flattening
/// the result yields the exact multiset of input logs.
pub fn group_by_session(logs: &[WorkoutLog], limit: Option<usize>) -> Vec<WorkoutGroup> {
    let mut index: HashMap<(NaiveDate, String), usize> = HashMap::new();
    let mut groups: Vec<WorkoutGroup> = Vec::new();

    for log in logs {
        let key = (log.date, log.plan_name.clone());
        match index.get(&key) {
            Some(&i) => groups[i].exercises.push(log.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(WorkoutGroup {
                    date: log.date,
                    plan_name: log.plan_name.clone(),
                    exercises: vec![log.clone()],
                });
            }
        }
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    groups
}

/// At most one entry per exercise id: the weight, reps and date of that
/// exercise's maximum-weight log. Only a strictly greater weight
/// replaces the incumbent, so ties keep the first-seen log, and the
/// reps travel with the winning log rather than being maximized
/// independently. Output is in first-seen exercise order.
pub fn best_scores(logs: &[WorkoutLog]) -> Vec<BestScore> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut scores: Vec<BestScore> = Vec::new();

    for log in logs {
        match index.get(log.exercise_id.as_str()) {
            Some(&i) => {
                if log.weight > scores[i].weight {
                    scores[i] = score_from(log);
                }
            }
            None => {
                index.insert(log.exercise_id.clone(), scores.len());
                scores.push(score_from(log));
            }
        }
    }

    scores
}

fn score_from(log: &WorkoutLog) -> BestScore {
    BestScore {
        exercise_id: log.exercise_id.clone(),
        exercise_name: log.exercise_name.clone(),
        weight: log.weight,
        reps: log.reps,
        date: log.date,
    }
}

/// Epley estimate: `round(weight × (1 + reps / 30))`.
pub fn one_rep_max(weight: f64, reps: i32) -> f64 {
    (weight * (1.0 + f64::from(reps) / 30.0)).round()
}

/// A new performance counts as a personal record iff its rounded
/// estimated max strictly exceeds the prior best's. Raw weight alone
/// does not decide: 105×3 loses to 100×5.
pub fn is_personal_record(weight: f64, reps: i32, best_weight: f64, best_reps: i32) -> bool {
    one_rep_max(weight, reps) > one_rep_max(best_weight, best_reps)
}
