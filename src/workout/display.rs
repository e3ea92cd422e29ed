use std::fmt;

use crate::workout::types::WorkoutSummary;

/// Render the fixed one-line report; every numeric field gets exactly three
/// decimal places regardless of magnitude.
impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories spent: {:.3}.",
            self.activity, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}
