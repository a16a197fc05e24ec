use std::time::Duration;

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{Exercise, HistoryFilters, WorkoutLog, WorkoutPlan};
use crate::stats::{self, WorkoutGroup};
use crate::store::StoreClient;

/// Wall-clock bound on the combined page-load fetch. A timeout degrades
/// to empty data; in-flight requests are not aborted, their results are
/// simply ignored.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const HISTORY_LIMIT: u32 = 50;
const RECENT_GROUPS: usize = 10;

#[derive(Clone)]
pub struct HomeState {
    pub store: StoreClient,
}

#[derive(Template)]
#[template(path = "home/index.html")]
struct HomeTemplate {
    user: AuthUser,
    plans: Vec<PlanCard>,
    recent: Vec<WorkoutGroup>,
}

struct PlanCard {
    plan: WorkoutPlan,
    exercise_names: Vec<String>,
}

pub async fn index(State(state): State<HomeState>, auth_user: AuthUser) -> Result<Response> {
    let (plans, history, exercises) = fetch_dashboard_data(&state.store).await;

    let plans = plans
        .into_iter()
        .filter(|plan| plan.is_active)
        .map(|plan| {
            let exercise_names = plan
                .exercises
                .iter()
                .filter_map(|entry| {
                    exercises
                        .iter()
                        .find(|e| e.id == entry.exercise_id)
                        .map(|e| e.name.clone())
                })
                .collect();
            PlanCard {
                plan,
                exercise_names,
            }
        })
        .collect();

    let recent = stats::group_by_session(&history, Some(RECENT_GROUPS));

    let template = HomeTemplate {
        user: auth_user,
        plans,
        recent,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

/// Plans, recent history and the exercise catalog, fetched concurrently
/// and raced against a timeout. Every failure mode collapses to empty
/// lists: the dashboard renders its placeholder state instead of
/// erroring.
async fn fetch_dashboard_data(
    store: &StoreClient,
) -> (Vec<WorkoutPlan>, Vec<WorkoutLog>, Vec<Exercise>) {
    let filters = HistoryFilters::with_limit(HISTORY_LIMIT);
    let fetch = async {
        tokio::join!(
            store.get_plans(),
            store.get_history(&filters),
            store.get_exercises(),
        )
    };

    match tokio::time::timeout(FETCH_TIMEOUT, fetch).await {
        Ok((plans, history, exercises)) => (
            plans.unwrap_or_else(|err| {
                tracing::error!("failed to fetch plans: {err}");
                Vec::new()
            }),
            history.unwrap_or_else(|err| {
                tracing::error!("failed to fetch history: {err}");
                Vec::new()
            }),
            exercises.unwrap_or_else(|err| {
                tracing::error!("failed to fetch exercises: {err}");
                Vec::new()
            }),
        ),
        Err(_) => {
            tracing::error!("dashboard fetch timed out after {FETCH_TIMEOUT:?}");
            (Vec::new(), Vec::new(), Vec::new())
        }
    }
}
