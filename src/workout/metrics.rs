use crate::workout::types::{Activity, Workout};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Meters covered by one pace step (running and race walking).
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters covered by one swim stroke.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Empirical coefficients for the running calorie formula.
mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Empirical coefficients for the race-walking calorie formula.
mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s, rounded the way the coefficients were calibrated.
    pub const KMH_TO_MS: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
}

/// Empirical coefficients for the swimming calorie formula.
mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Distance in km covered by `action` countable units of `unit_length_m` each.
pub fn unit_distance_km(action: u32, unit_length_m: f64) -> f64 {
    f64::from(action) * unit_length_m / M_IN_KM
}

/// Average speed in km/h over the whole workout.
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Pool-lap based average speed in km/h; swimming ignores stroke distance
/// for speed purposes.
pub fn pool_speed_kmh(length_pool_m: f64, count_pool: u32, duration_h: f64) -> f64 {
    length_pool_m * f64::from(count_pool) / M_IN_KM / duration_h
}

pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (running::SPEED_MULTIPLIER * speed_kmh + running::SPEED_SHIFT) * weight_kg / M_IN_KM
        * (duration_h * MIN_IN_HOUR)
}

pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let speed_ms = speed_kmh * walking::KMH_TO_MS;
    let height_m = height_cm / walking::CM_IN_M;
    (walking::WEIGHT_MULTIPLIER * weight_kg
        + speed_ms.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * (duration_h * MIN_IN_HOUR)
}

pub fn swimming_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg * duration_h
}

impl Workout {
    /// Distance covered in km, derived from the action count for every
    /// activity (a swim "step" is one stroke).
    pub fn distance_km(&self) -> f64 {
        let unit_length = match self.activity {
            Activity::Swimming { .. } => STROKE_LENGTH_M,
            Activity::Running | Activity::Walking { .. } => STEP_LENGTH_M,
        };
        unit_distance_km(self.action, unit_length)
    }

    /// Average speed in km/h over the workout duration.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.activity {
            Activity::Swimming {
                length_pool_m,
                count_pool,
            } => pool_speed_kmh(length_pool_m, count_pool, self.duration_h),
            Activity::Running | Activity::Walking { .. } => {
                mean_speed_kmh(self.distance_km(), self.duration_h)
            }
        }
    }

    /// Calories burned, using the activity's own formula.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.activity {
            Activity::Running => running_calories(speed, self.weight_kg, self.duration_h),
            Activity::Walking { height_cm } => {
                walking_calories(speed, self.weight_kg, height_cm, self.duration_h)
            }
            Activity::Swimming { .. } => {
                swimming_calories(speed, self.weight_kg, self.duration_h)
            }
        }
    }
}
