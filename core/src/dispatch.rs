use std::fmt;
use std::str::FromStr;

use crate::errors::WorkoutError;
use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Tre-bokstavs kode for treningstype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    /// Fast rekkefølge, brukes også i feilmeldingen.
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Swm, WorkoutCode::Run, WorkoutCode::Wlk];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Antall posisjonelle verdier konstruktøren forventer.
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
            WorkoutCode::Swm => 5,
        }
    }

    pub fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownCode {
                code: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// Les data fra sensorene: kode + posisjonelle verdier -> økt.
///
/// Rekkefølge per kode:
/// - RUN: action, duration, weight
/// - WLK: action, duration, weight, height
/// - SWM: action, duration, weight, length_pool, count_pool
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutCode = code.parse()?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            code: kind.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let workout = match (kind, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Workout::Running(Running::new(action, duration, weight)?)
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            Workout::SportsWalking(SportsWalking::new(action, duration, weight, height)?)
        }
        (WorkoutCode::Swm, &[action, duration, weight, length_pool, count_pool]) => {
            Workout::Swimming(Swimming::new(action, duration, weight, length_pool, count_pool)?)
        }
        // arity sjekket over
        _ => {
            return Err(WorkoutError::ArgumentCount {
                code: kind.to_string(),
                expected: kind.arity(),
                got: data.len(),
            })
        }
    };
    log::debug!("read_package {kind}: {} values -> {workout:?}", data.len());
    Ok(workout)
}
