pub mod display;
pub mod metrics;
pub mod registry;
pub mod summary;
pub mod types;

pub use registry::build_workout;
pub use summary::derive_workout_summary;
pub use types::{Activity, Workout, WorkoutError, WorkoutSummary};

/// Turn one raw sensor package into a printable workout summary.
///
/// The function performs two stages:
/// 1. [`registry::build_workout`] validates the activity code and the
///    positional parameters and produces a typed [`Workout`].
/// 2. [`summary::derive_workout_summary`] computes distance, mean speed, and
///    calories and freezes them into a [`WorkoutSummary`].
pub fn summarize_package(code: &str, params: &[f64]) -> Result<WorkoutSummary, WorkoutError> {
    let workout = build_workout(code, params)?;
    Ok(derive_workout_summary(&workout))
}
