use thiserror::Error;

/// Activity-specific part of a sensor package.
///
/// The three variants cover the formula sets the calculator knows about;
/// each carries only the fields its own calorie formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running,
    Walking {
        /// Athlete height in centimeters.
        height_cm: f64,
    },
    Swimming {
        /// Pool length in meters.
        length_pool_m: f64,
        /// Completed laps.
        count_pool: u32,
    },
}

/// One decoded workout: the common sensor fields plus the activity tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    /// Countable units performed (pace steps or swim strokes).
    pub action: u32,
    /// Workout length in hours, always positive.
    pub duration_h: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
    pub activity: Activity,
}

/// Derived metrics for one workout, frozen for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub activity: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown activity code: {0:?}")]
    UnknownActivity(String),
    #[error("activity {code} takes {expected} parameters, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
    #[error("{name} must be {constraint}, got {value}")]
    InvalidParameter {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },
}
