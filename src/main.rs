use fitsum::summarize_package;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample packages as they arrive from the sensor unit: activity code plus
/// positional parameters (action, duration, weight, activity extras).
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitsum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for (code, params) in PACKAGES {
        match summarize_package(code, params) {
            Ok(summary) => println!("{summary}"),
            // A bad package must not hide the remaining summaries.
            Err(err) => tracing::error!(code, %err, "skipping package"),
        }
    }
}
