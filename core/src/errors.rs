use thiserror::Error;

/// Feil ved oppbygging av en treningsøkt fra en pakke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("Неизвестный тип тренировки: {code}. Допустимые значения: {}", .allowed.join(", "))]
    UnknownCode { code: String, allowed: Vec<String> },

    #[error("{code}: expected {expected} values, got {got}")]
    ArgumentCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid {name} = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}

/// Feil fra lasting/lagring av pakkelister.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("package parse at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to serialize packages: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Kort etikett for metrikker/logg.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownCode { .. } => "unknown_code",
            WorkoutError::ArgumentCount { .. } => "argument_count",
            WorkoutError::InvalidArgument { .. } => "invalid_argument",
            WorkoutError::NonPositiveDuration(_) => "non_positive_duration",
        }
    }
}
