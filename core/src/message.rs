use std::fmt;

use serde::{Deserialize, Serialize};

/// Informasjonsmelding om en gjennomført økt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // timer
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

impl InfoMessage {
    /// Ferdig formatert linje, tre desimaler på alle tall.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
