use workout_core::{read_package, Training, Workout, WorkoutCode, WorkoutError};

#[test]
fn test_unknown_code_lists_allowed() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::UnknownCode {
            code: "XYZ".to_string(),
            allowed: vec!["SWM".to_string(), "RUN".to_string(), "WLK".to_string()],
        }
    );

    let msg = err.to_string();
    assert!(msg.contains("XYZ"));
    assert!(msg.contains("SWM, RUN, WLK"));
}

#[test]
fn test_mapping() {
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap(),
        Workout::Swimming(_)
    ));
    assert!(matches!(read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap(), Workout::Running(_)));
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap(),
        Workout::SportsWalking(_)
    ));
}

#[test]
fn test_argument_count() {
    // SWM-data til WLK
    let err = read_package("WLK", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArgumentCount { code: "WLK".to_string(), expected: 4, got: 5 }
    );
    assert!(matches!(read_package("SWM", &[]), Err(WorkoutError::ArgumentCount { got: 0, .. })));
}

#[test]
fn test_invalid_values() {
    assert!(matches!(
        read_package("RUN", &[1500.5, 1.0, 75.0]),
        Err(WorkoutError::InvalidArgument { name: "action", .. })
    ));
    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, -75.0]),
        Err(WorkoutError::InvalidArgument { name: "weight", .. })
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, -25.0, 40.0]),
        Err(WorkoutError::InvalidArgument { name: "length_pool", .. })
    ));
}

#[test]
fn test_code_display_roundtrip() {
    for code in WorkoutCode::ALL {
        assert_eq!(code.to_string().parse::<WorkoutCode>().unwrap(), code);
    }
}

#[test]
fn test_huge_counts_are_rejected() {
    // 1e20 skritt kan ikke lagres eksakt som heltall -> feil, ikke avkuttet distanse
    let err = read_package("RUN", &[1e20, 1.0, 75.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::InvalidArgument { name: "action", value: 1e20, reason: "too large" }
    );
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 1e19]),
        Err(WorkoutError::InvalidArgument { name: "count_pool", reason: "too large", .. })
    ));

    let big = read_package("RUN", &[1e15, 1.0, 75.0]).unwrap();
    assert_eq!(big.distance(), 1e15 * 0.65 / 1000.0);
}

#[test]
fn test_zero_weight_is_accepted() {
    let w = read_package("RUN", &[15000.0, 1.0, 0.0]).unwrap();
    assert_eq!(
        w.show_training_info().get_message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 0.000."
    );
}
