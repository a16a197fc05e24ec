use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::{
    BestScoreRecord, BestScoreUpdate, Exercise, HistoryFilters, PlanDetails, SetSubmission,
    WorkoutLog, WorkoutPlan, WorkoutSubmission,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store responded with status {0}")]
    Status(StatusCode),
}

/// Client for the spreadsheet-backed store: one method per backend
/// action. Every call is a POST carrying the action both as a query
/// parameter and as the `action` field of the JSON body. Failures are
/// propagated as-is; nothing is retried or cached.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        action: &str,
        payload: Value,
    ) -> Result<T, StoreError> {
        let url = format!("{}?action={}", self.base_url, action);

        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), Value::String(action.to_string()));
        if let Value::Object(fields) = payload {
            body.extend(fields);
        }

        tracing::debug!(action, "calling store");
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(action, %status, "store returned an error status");
            return Err(StoreError::Status(status));
        }

        Ok(response.json().await?)
    }

    // Workout plans
    pub async fn get_plans(&self) -> Result<Vec<WorkoutPlan>, StoreError> {
        self.call("getPlans", json!({})).await
    }

    pub async fn get_plan(&self, plan_id: &str) -> Result<WorkoutPlan, StoreError> {
        self.call("getPlan", json!({ "planId": plan_id })).await
    }

    pub async fn update_plan(&self, plan: &WorkoutPlan) -> Result<(), StoreError> {
        self.call::<Value>("updatePlan", json!({ "plan": plan }))
            .await?;
        Ok(())
    }

    pub async fn get_plan_details(&self, plan_id: &str) -> Result<PlanDetails, StoreError> {
        self.call("getPlanDetails", json!({ "planId": plan_id }))
            .await
    }

    // Exercises
    pub async fn get_exercises(&self) -> Result<Vec<Exercise>, StoreError> {
        self.call("getExercises", json!({})).await
    }

    pub async fn get_exercise(&self, exercise_id: &str) -> Result<Exercise, StoreError> {
        self.call("getExercise", json!({ "exerciseId": exercise_id }))
            .await
    }

    // Workout logging
    pub async fn log_workout(&self, workout: &WorkoutSubmission) -> Result<(), StoreError> {
        self.call::<Value>("logWorkout", json!({ "workoutData": workout }))
            .await?;
        Ok(())
    }

    pub async fn log_set(&self, set: &SetSubmission) -> Result<(), StoreError> {
        self.call::<Value>("logSet", json!({ "exerciseData": set }))
            .await?;
        Ok(())
    }

    // History
    pub async fn get_history(
        &self,
        filters: &HistoryFilters,
    ) -> Result<Vec<WorkoutLog>, StoreError> {
        self.call("getHistory", json!({ "filters": filters })).await
    }

    pub async fn get_exercise_history(
        &self,
        exercise_id: &str,
    ) -> Result<Vec<WorkoutLog>, StoreError> {
        self.call("getExerciseHistory", json!({ "exerciseId": exercise_id }))
            .await
    }

    // Best scores
    pub async fn get_best_scores(&self) -> Result<Vec<BestScoreRecord>, StoreError> {
        self.call("getBestScores", json!({})).await
    }

    pub async fn update_best_score(&self, score: &BestScoreUpdate) -> Result<(), StoreError> {
        self.call::<Value>("updateBestScore", json!({ "scoreData": score }))
            .await?;
        Ok(())
    }
}
