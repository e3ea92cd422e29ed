use crate::workout::types::{Activity, Workout, WorkoutError};

type Constructor = fn(&[f64]) -> Result<Workout, WorkoutError>;

/// Fixed code→constructor table; the set of activities is static.
const REGISTRY: &[(&str, Constructor)] = &[
    ("RUN", build_running),
    ("WLK", build_walking),
    ("SWM", build_swimming),
];

/// Decode one sensor package into a typed workout record.
///
/// The code selects the constructor; the parameters are assigned
/// positionally in sensor order (action, duration, weight, then the
/// activity-specific fields). Unknown codes, wrong parameter counts, and
/// out-of-range values all come back as [`WorkoutError`]s.
pub fn build_workout(code: &str, params: &[f64]) -> Result<Workout, WorkoutError> {
    let Some((code, build)) = REGISTRY.iter().find(|(entry, _)| *entry == code) else {
        return Err(WorkoutError::UnknownActivity(code.to_string()));
    };
    tracing::debug!(code, ?params, "decoding sensor package");
    build(params)
}

fn build_running(params: &[f64]) -> Result<Workout, WorkoutError> {
    let &[action, duration_h, weight_kg] = params else {
        return Err(arity_mismatch("RUN", 3, params.len()));
    };
    Ok(Workout {
        action: count_field("action", action)?,
        duration_h: duration_field(duration_h)?,
        weight_kg: positive_field("weight", weight_kg)?,
        activity: Activity::Running,
    })
}

fn build_walking(params: &[f64]) -> Result<Workout, WorkoutError> {
    let &[action, duration_h, weight_kg, height_cm] = params else {
        return Err(arity_mismatch("WLK", 4, params.len()));
    };
    Ok(Workout {
        action: count_field("action", action)?,
        duration_h: duration_field(duration_h)?,
        weight_kg: positive_field("weight", weight_kg)?,
        activity: Activity::Walking {
            height_cm: positive_field("height", height_cm)?,
        },
    })
}

fn build_swimming(params: &[f64]) -> Result<Workout, WorkoutError> {
    let &[action, duration_h, weight_kg, length_pool_m, count_pool] = params else {
        return Err(arity_mismatch("SWM", 5, params.len()));
    };
    Ok(Workout {
        action: count_field("action", action)?,
        duration_h: duration_field(duration_h)?,
        weight_kg: positive_field("weight", weight_kg)?,
        activity: Activity::Swimming {
            length_pool_m: positive_field("length_pool", length_pool_m)?,
            count_pool: count_field("count_pool", count_pool)?,
        },
    })
}

fn arity_mismatch(code: &'static str, expected: usize, actual: usize) -> WorkoutError {
    WorkoutError::ArityMismatch {
        code,
        expected,
        actual,
    }
}

fn duration_field(value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidDuration(value))
    }
}

fn positive_field(name: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidParameter {
            name,
            constraint: "positive",
            value,
        })
    }
}

fn count_field(name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter {
            name,
            constraint: "a non-negative whole number",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_build_their_activity() {
        let run = build_workout("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.activity, Activity::Running);

        let walk = build_workout("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.activity, Activity::Walking { height_cm: 180.0 });

        let swim = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            swim.activity,
            Activity::Swimming {
                length_pool_m: 25.0,
                count_pool: 40,
            }
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = build_workout("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownActivity("XYZ".to_string()));
    }

    #[test]
    fn wrong_parameter_count_is_rejected() {
        let err = build_workout("RUN", &[15_000.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::ArityMismatch {
                code: "RUN",
                expected: 3,
                actual: 2,
            }
        );

        let err = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 7.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::ArityMismatch {
                code: "SWM",
                expected: 5,
                actual: 6,
            }
        );
    }

    #[test]
    fn zero_duration_is_rejected_before_any_division() {
        let err = build_workout("RUN", &[15_000.0, 0.0, 75.0]).unwrap_err();
        assert_eq!(err, WorkoutError::InvalidDuration(0.0));
    }

    #[test]
    fn fractional_action_count_is_rejected() {
        let err = build_workout("RUN", &[15_000.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { name: "action", .. }
        ));
    }

    #[test]
    fn zero_lap_count_is_allowed() {
        let swim = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0]).unwrap();
        assert_eq!(swim.mean_speed_kmh(), 0.0);
    }
}
