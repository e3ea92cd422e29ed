pub mod workout;

pub use workout::{
    Activity, Workout, WorkoutError, WorkoutSummary, build_workout, derive_workout_summary,
    summarize_package,
};
