use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{ActiveSessions, ActiveWorkout, CompletedSet, HistoryFilters, SessionExercise};
use crate::store::StoreClient;

const HISTORY_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct WorkoutState {
    pub store: StoreClient,
    pub sessions: ActiveSessions,
}

#[derive(Template)]
#[template(path = "workout/active.html")]
struct ActiveWorkoutTemplate {
    user: AuthUser,
    plan_name: String,
    date: NaiveDate,
    exercises: Vec<ExerciseCard>,
    error: Option<String>,
}

struct ExerciseCard {
    number: usize,
    exercise: SessionExercise,
    sets: Vec<CompletedSet>,
    remaining: i32,
}

// Handlers

pub async fn start(
    State(state): State<WorkoutState>,
    auth_user: AuthUser,
    Path(plan_id): Path<String>,
) -> Result<Response> {
    let filters = HistoryFilters::with_limit(HISTORY_LIMIT);
    let (plan, exercises, history) = tokio::join!(
        state.store.get_plan(&plan_id),
        state.store.get_exercises(),
        state.store.get_history(&filters),
    );

    // Without the plan there is nothing to start; the catalog and the
    // history only enrich the session view.
    let plan = plan?;
    let exercises = exercises.unwrap_or_else(|err| {
        tracing::error!("failed to fetch exercises: {err}");
        Vec::new()
    });
    let history = history.unwrap_or_else(|err| {
        tracing::error!("failed to fetch history: {err}");
        Vec::new()
    });

    let workout = ActiveWorkout::start(&plan, &exercises, &history);
    state.sessions.insert(&auth_user.session_id, workout);

    Ok(Redirect::to("/workout").into_response())
}

pub async fn show(State(state): State<WorkoutState>, auth_user: AuthUser) -> Result<Response> {
    match state.sessions.get(&auth_user.session_id) {
        Some(workout) => render_active(auth_user, &workout, None),
        None => Ok(Redirect::to("/").into_response()),
    }
}

#[derive(Deserialize)]
pub struct RecordSetForm {
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
}

pub async fn record_set(
    State(state): State<WorkoutState>,
    auth_user: AuthUser,
    Form(form): Form<RecordSetForm>,
) -> Result<Response> {
    let Some(workout) = state.sessions.get(&auth_user.session_id) else {
        return Ok(Redirect::to("/").into_response());
    };

    // Validated here, before anything is recorded; invalid input never
    // reaches the store.
    if form.weight <= 0.0 || form.reps <= 0 {
        return render_active(
            auth_user,
            &workout,
            Some("Please enter valid weight and reps".to_string()),
        );
    }

    let _ = state.sessions.with(&auth_user.session_id, |w| {
        w.record_set(&form.exercise_id, form.weight, form.reps)
    });

    match state.sessions.get(&auth_user.session_id) {
        Some(workout) => render_active(auth_user, &workout, None),
        None => Ok(Redirect::to("/").into_response()),
    }
}

pub async fn complete(State(state): State<WorkoutState>, auth_user: AuthUser) -> Result<Response> {
    let Some(workout) = state.sessions.get(&auth_user.session_id) else {
        return Ok(Redirect::to("/").into_response());
    };

    if !workout.is_complete() {
        return render_active(
            auth_user,
            &workout,
            Some(
                "Please complete all sets for all exercises before finishing the workout."
                    .to_string(),
            ),
        );
    }

    let today = chrono::Local::now().date_naive();
    let submission = workout.submission(today);

    if let Err(err) = state.store.log_workout(&submission).await {
        tracing::error!("failed to save workout: {err}");
        return render_active(
            auth_user,
            &workout,
            Some("Failed to complete workout. Please try again.".to_string()),
        );
    }

    state.sessions.remove(&auth_user.session_id);
    Ok(Redirect::to("/").into_response())
}

pub async fn abandon(State(state): State<WorkoutState>, auth_user: AuthUser) -> Result<Response> {
    state.sessions.remove(&auth_user.session_id);
    Ok(Redirect::to("/").into_response())
}

fn render_active(
    user: AuthUser,
    workout: &ActiveWorkout,
    error: Option<String>,
) -> Result<Response> {
    let exercises = workout
        .exercises
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let sets = workout.sets_for(&exercise.id).to_vec();
            let remaining = (exercise.target_sets - sets.len() as i32).max(0);
            ExerciseCard {
                number: i + 1,
                exercise: exercise.clone(),
                sets,
                remaining,
            }
        })
        .collect();

    let template = ActiveWorkoutTemplate {
        user,
        plan_name: workout.plan_name.clone(),
        date: chrono::Local::now().date_naive(),
        exercises,
        error,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
