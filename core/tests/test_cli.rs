use workout_core::metrics;
use workout_core::{default_packages, run_packages, Package, WorkoutError};

#[test]
fn test_default_packages_output() {
    let mut out = Vec::new();
    let summary = run_packages(&default_packages(), &mut out).unwrap();
    assert!(summary.is_ok());
    assert_eq!(summary.printed, 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn test_failed_package_does_not_stop_run() {
    let packages = vec![
        Package::new("XYZ", &[1.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 0.0, 75.0, 180.0]),
    ];

    let rejected_before = metrics::packages_rejected_count("unknown_code");

    let mut out = Vec::new();
    let summary = run_packages(&packages, &mut out).unwrap();

    assert_eq!(summary.printed, 1);
    assert_eq!(summary.failed.len(), 2);
    assert_eq!(summary.failed[0].0, 0);
    assert!(matches!(summary.failed[0].1, WorkoutError::UnknownCode { .. }));
    assert_eq!(summary.failed[1], (2, WorkoutError::NonPositiveDuration(0.0)));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Тип тренировки: Running;"));

    // tellere er prosess-globale, andre tester kan ha bidratt
    assert!(metrics::packages_rejected_count("unknown_code") >= rejected_before + 1);
    assert!(metrics::workouts_processed_count("Running") >= 1);
    assert!(metrics::gather_text().contains("packages_rejected_total"));
}
