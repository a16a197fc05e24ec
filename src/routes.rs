use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::handlers::{auth, best_scores, health, history, home, proxy, workout};
use crate::session::SessionKey;

pub fn create_router(
    home_state: home::HomeState,
    workout_state: workout::WorkoutState,
    history_state: history::HistoryState,
    best_scores_state: best_scores::BestScoresState,
    proxy_state: proxy::ProxyState,
    auth_state: auth::AuthState,
    session_key: SessionKey,
) -> Router {
    Router::new()
        // Dashboard
        .route("/", get(home::index))
        .with_state(home_state)
        // Workout session routes
        .route("/workouts/{plan_id}/start", post(workout::start))
        .route("/workout", get(workout::show))
        .route("/workout/sets", post(workout::record_set))
        .route("/workout/complete", post(workout::complete))
        .route("/workout/abandon", post(workout::abandon))
        .with_state(workout_state)
        // History routes
        .route("/history", get(history::index))
        .with_state(history_state)
        // Best score routes
        .route("/best-scores", get(best_scores::index))
        .with_state(best_scores_state)
        // Store proxy
        .route(
            "/api/proxy",
            post(proxy::forward).options(proxy::preflight),
        )
        .with_state(proxy_state)
        // Auth routes
        .route("/auth/signin", get(auth::signin_page))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/signout", post(auth::signout))
        .route("/auth/error", get(auth::error_page))
        .with_state(auth_state)
        // Health check
        .route("/health", get(health::health_check))
        // Session key via Extension layer
        .layer(Extension(session_key))
}
