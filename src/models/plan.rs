use serde::{Deserialize, Serialize};

/// A named, ordered template of exercises with per-exercise targets.
/// Created and edited in the spreadsheet; read-only to this app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exercises: Vec<PlanExercise>,
    #[serde(default)]
    pub frequency: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    pub exercise_id: String,
    pub target_sets: i32,
    /// Free text, e.g. "8-12".
    pub target_reps: String,
    /// Rest between sets, in seconds.
    pub rest_time: i32,
}

/// The backend's pre-merged view of a plan: targets joined with the
/// athlete's most recent performance per exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDetails {
    pub plan_name: String,
    pub exercises: Vec<PlanExerciseDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExerciseDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub last_weight: f64,
    pub last_reps: i32,
    pub last_sets: i32,
    pub target_sets: i32,
    pub target_reps: String,
    pub rest_time: i32,
}
