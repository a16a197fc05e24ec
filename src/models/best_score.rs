use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best performance derived from history: the maximum-weight log per
/// exercise, carrying the reps and date of that specific log. Never
/// persisted by this app; recomputed on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScore {
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub date: NaiveDate,
}

/// Row shape of the best-score sheet the backend maintains itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreRecord {
    pub exercise_id: String,
    pub exercise_name: String,
    pub best_weight: f64,
    pub best_reps: i32,
    pub achieved_date: NaiveDate,
    #[serde(default)]
    pub category: String,
}

/// Payload for `updateBestScore`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreUpdate {
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub date: NaiveDate,
}
