use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::models::{Exercise, LoggedExercise, WorkoutLog, WorkoutPlan, WorkoutSubmission};

/// One exercise of the selected plan, merged with the athlete's most
/// recent performance so the set entry form can be pre-filled.
#[derive(Debug, Clone)]
pub struct SessionExercise {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub last_weight: f64,
    pub last_reps: i32,
    pub last_sets: i32,
    pub target_sets: i32,
    pub target_reps: String,
    pub rest_time: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct CompletedSet {
    pub weight: f64,
    pub reps: i32,
    pub set_number: i32,
}

/// An in-progress execution of a plan. Lives in memory only: created
/// when a plan is started, dropped on completion or abandon, never
/// partially persisted.
#[derive(Debug, Clone)]
pub struct ActiveWorkout {
    pub plan_id: String,
    pub plan_name: String,
    pub exercises: Vec<SessionExercise>,
    completed: HashMap<String, Vec<CompletedSet>>,
}

impl ActiveWorkout {
    pub fn start(plan: &WorkoutPlan, exercises: &[Exercise], history: &[WorkoutLog]) -> Self {
        let merged = plan
            .exercises
            .iter()
            .map(|entry| {
                let exercise = exercises.iter().find(|e| e.id == entry.exercise_id);
                let last = latest_log(history, &entry.exercise_id);

                SessionExercise {
                    id: exercise.map_or_else(|| entry.exercise_id.clone(), |e| e.id.clone()),
                    name: exercise
                        .map_or_else(|| "Unknown Exercise".to_string(), |e| e.name.clone()),
                    image_url: exercise.map_or_else(String::new, |e| e.image_url.clone()),
                    last_weight: last.map_or(0.0, |log| log.weight),
                    last_reps: last.map_or(8, |log| log.reps),
                    last_sets: last.map_or(0, |log| log.sets),
                    target_sets: entry.target_sets,
                    target_reps: entry.target_reps.clone(),
                    rest_time: entry.rest_time,
                }
            })
            .collect();

        Self {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            exercises: merged,
            completed: HashMap::new(),
        }
    }

    /// Records a set with the next set number for the exercise. Returns
    /// false without recording when the exercise is not part of the plan
    /// or has already reached its target set count.
    pub fn record_set(&mut self, exercise_id: &str, weight: f64, reps: i32) -> bool {
        let Some(exercise) = self.exercises.iter().find(|e| e.id == exercise_id) else {
            return false;
        };
        let target_sets = exercise.target_sets;

        let sets = self.completed.entry(exercise_id.to_string()).or_default();
        if sets.len() as i32 >= target_sets {
            return false;
        }

        let set_number = sets.len() as i32 + 1;
        sets.push(CompletedSet {
            weight,
            reps,
            set_number,
        });
        true
    }

    pub fn sets_for(&self, exercise_id: &str) -> &[CompletedSet] {
        self.completed
            .get(exercise_id)
            .map_or(&[], Vec::as_slice)
    }

    /// The session may only be submitted once every exercise has reached
    /// its target set count.
    pub fn is_complete(&self) -> bool {
        self.exercises
            .iter()
            .all(|e| self.sets_for(&e.id).len() as i32 >= e.target_sets)
    }

    /// Exactly one log entry per exercise: the first recorded set's
    /// weight and reps plus the total set count. Exercises with a zero
    /// target (no sets recorded) fall back to their last performance.
    pub fn submission(&self, date: NaiveDate) -> WorkoutSubmission {
        let exercises = self
            .exercises
            .iter()
            .map(|exercise| {
                let sets = self.sets_for(&exercise.id);
                let first = sets.first();
                LoggedExercise {
                    exercise_id: exercise.id.clone(),
                    exercise_name: exercise.name.clone(),
                    weight: first.map_or(exercise.last_weight, |s| s.weight),
                    reps: first.map_or(exercise.last_reps, |s| s.reps),
                    sets: sets.len() as i32,
                }
            })
            .collect();

        WorkoutSubmission {
            date,
            plan_name: self.plan_name.clone(),
            exercises,
        }
    }
}

/// The latest-dated log for an exercise; the earliest-fetched one wins
/// among same-date entries.
fn latest_log<'a>(history: &'a [WorkoutLog], exercise_id: &str) -> Option<&'a WorkoutLog> {
    let mut latest: Option<&WorkoutLog> = None;
    for log in history.iter().filter(|l| l.exercise_id == exercise_id) {
        if latest.map_or(true, |current| log.date > current.date) {
            latest = Some(log);
        }
    }
    latest
}

/// In-progress workouts keyed by sign-in session id. Held in memory
/// only; nothing here survives completion, abandon, or a restart.
#[derive(Clone, Default)]
pub struct ActiveSessions(Arc<Mutex<HashMap<String, ActiveWorkout>>>);

impl ActiveSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<ActiveWorkout> {
        self.0.lock().unwrap().get(session_id).cloned()
    }

    pub fn insert(&self, session_id: &str, workout: ActiveWorkout) {
        self.0
            .lock()
            .unwrap()
            .insert(session_id.to_string(), workout);
    }

    pub fn remove(&self, session_id: &str) -> Option<ActiveWorkout> {
        self.0.lock().unwrap().remove(session_id)
    }

    pub fn with<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut ActiveWorkout) -> R,
    ) -> Option<R> {
        self.0.lock().unwrap().get_mut(session_id).map(f)
    }
}
