use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::HistoryFilters;
use crate::stats::{self, WorkoutGroup};
use crate::store::StoreClient;

const HISTORY_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct HistoryState {
    pub store: StoreClient,
}

#[derive(Template)]
#[template(path = "history/index.html")]
struct HistoryTemplate {
    user: AuthUser,
    workouts: Vec<WorkoutGroup>,
}

pub async fn index(State(state): State<HistoryState>, auth_user: AuthUser) -> Result<Response> {
    let history = state
        .store
        .get_history(&HistoryFilters::with_limit(HISTORY_LIMIT))
        .await
        .unwrap_or_else(|err| {
            tracing::error!("failed to fetch history: {err}");
            Vec::new()
        });

    let workouts = stats::group_by_session(&history, None);

    let template = HistoryTemplate {
        user: auth_user,
        workouts,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
