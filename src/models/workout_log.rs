use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exercise's recorded performance on one date within one session.
/// Append-only from this app's perspective; the backend assigns ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub date: NaiveDate,
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
    pub plan_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl HistoryFilters {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Payload for `logWorkout`: one entry per exercise of the completed
/// session, not one per individual set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSubmission {
    pub date: NaiveDate,
    pub plan_name: String,
    pub exercises: Vec<LoggedExercise>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExercise {
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
}

/// Payload for `logSet`: a single set, logged as it happens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSubmission {
    pub date: NaiveDate,
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub set_number: i32,
    pub plan_name: String,
}
