//! End-to-end scenarios: sensor package in, rendered report out.

use workouts::{
    Package, WorkoutError, WorkoutKind, resolve, summarize, summarize_batch,
    summary::sample_packages,
};

/// Parses a rendered report back into its label and four numeric fields.
fn parse_message(message: &str) -> (String, [f64; 4]) {
    let body = message
        .strip_suffix('.')
        .expect("report ends with a period");
    let fields: Vec<&str> = body.split("; ").collect();
    assert_eq!(fields.len(), 5, "unexpected report shape: {message}");

    let value = |field: &str, prefix: &str, suffix: &str| -> f64 {
        field
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .unwrap_or_else(|| panic!("field {field:?} does not match {prefix:?}"))
            .parse()
            .expect("numeric field")
    };

    let kind = fields[0]
        .strip_prefix("Workout type: ")
        .expect("kind field")
        .to_string();
    (
        kind,
        [
            value(fields[1], "Duration: ", " h"),
            value(fields[2], "Distance: ", " km"),
            value(fields[3], "Avg speed: ", " km/h"),
            value(fields[4], "Calories: ", ""),
        ],
    )
}

#[test]
fn test_sample_session_messages() {
    let messages: Vec<String> = summarize_batch(&sample_packages())
        .into_iter()
        .map(|r| r.unwrap().message())
        .collect();

    assert_eq!(
        messages,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories: 157.500.",
        ]
    );
}

#[test]
fn test_walking_without_height() {
    assert_eq!(
        resolve("WLK", &[9000.0, 1.0, 75.0]).err(),
        Some(WorkoutError::ArityMismatch {
            kind: WorkoutKind::Walking,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn test_rendering_is_idempotent_and_parses_back() {
    let packages = [
        Package::new("RUN", vec![12345.0, 1.25, 68.4]),
        Package::new("WLK", vec![40000.0, 2.5, 91.0, 150.0]),
        Package::new("SWM", vec![1500.0, 0.75, 62.0, 50.0, 30.0]),
    ];

    for package in &packages {
        let training = resolve(&package.workout_type, &package.data).unwrap();
        let first = training.report().message();
        let second = training.report().message();
        assert_eq!(first, second);

        let (kind, values) = parse_message(&first);
        assert_eq!(kind, training.kind().label());
        let expected = [
            package.data[1],
            training.distance(),
            training.mean_speed(),
            training.spent_calories(),
        ];
        for (parsed, computed) in values.iter().zip(expected) {
            assert!(
                (parsed - computed).abs() <= 0.0005 + 1e-9,
                "{parsed} vs {computed} in {first}"
            );
        }
    }
}

#[test]
fn test_mean_speed_model() {
    let run = resolve("RUN", &[8000.0, 0.5, 70.0]).unwrap();
    assert!((run.distance() - 8000.0 * 0.65 / 1000.0).abs() < 1e-9);
    assert!((run.mean_speed() - run.distance() / 0.5).abs() < 1e-9);

    let walk = resolve("WLK", &[8000.0, 2.0, 70.0, 170.0]).unwrap();
    assert!((walk.mean_speed() - walk.distance() / 2.0).abs() < 1e-9);

    let swim = resolve("SWM", &[900.0, 0.5, 70.0, 25.0, 60.0]).unwrap();
    assert!((swim.mean_speed() - 25.0 * 60.0 / 1000.0 / 0.5).abs() < 1e-9);
}

#[test]
fn test_zero_duration_never_reports_infinity() {
    for package in [
        Package::new("RUN", vec![15000.0, 0.0, 75.0]),
        Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        Package::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        assert_eq!(
            summarize(&package),
            Err(WorkoutError::DivisionByZero { field: "duration" })
        );
    }
}

#[test]
fn test_json_report() {
    let report = summarize(&Package::new("RUN", vec![15000.0, 1.0, 75.0])).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["workout_kind"], "Running");
    assert!((json["calories"].as_f64().unwrap() - 699.75).abs() < 1e-9);
}
