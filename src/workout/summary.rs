use crate::workout::types::{Activity, Workout, WorkoutSummary};

/// Snapshot the derived metrics of a workout for rendering.
pub fn derive_workout_summary(workout: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        activity: activity_name(workout.activity),
        duration_h: workout.duration_h,
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh(),
        calories: workout.spent_calories(),
    }
}

pub fn activity_name(activity: Activity) -> &'static str {
    match activity {
        Activity::Running => "Running",
        Activity::Walking { .. } => "SportsWalking",
        Activity::Swimming { .. } => "Swimming",
    }
}
