use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{BestScore, HistoryFilters};
use crate::stats;
use crate::store::StoreClient;

/// Full history window; best scores are derived locally on every load.
const HISTORY_LIMIT: u32 = 1000;

#[derive(Clone)]
pub struct BestScoresState {
    pub store: StoreClient,
}

#[derive(Template)]
#[template(path = "best_scores/index.html")]
struct BestScoresTemplate {
    user: AuthUser,
    scores: Vec<BestScore>,
}

pub async fn index(
    State(state): State<BestScoresState>,
    auth_user: AuthUser,
) -> Result<Response> {
    let history = state
        .store
        .get_history(&HistoryFilters::with_limit(HISTORY_LIMIT))
        .await
        .unwrap_or_else(|err| {
            tracing::error!("failed to fetch history for best scores: {err}");
            Vec::new()
        });

    let scores = stats::best_scores(&history);

    let template = BestScoresTemplate {
        user: auth_user,
        scores,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
