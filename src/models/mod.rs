pub mod best_score;
pub mod exercise;
pub mod plan;
pub mod workout;
pub mod workout_log;

pub use best_score::{BestScore, BestScoreRecord, BestScoreUpdate};
pub use exercise::Exercise;
pub use plan::{PlanDetails, PlanExercise, PlanExerciseDetail, WorkoutPlan};
pub use workout::{ActiveSessions, ActiveWorkout, CompletedSet, SessionExercise};
pub use workout_log::{
    HistoryFilters, LoggedExercise, SetSubmission, WorkoutLog, WorkoutSubmission,
};
