use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::errors::StorageError;

/// En pakke fra sensorene: kode + rådata i konstruktør-rekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "workout_type", alias = "type")]
    pub code: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self { code: code.to_string(), data: data.to_vec() }
    }
}

/// Den faste prøvelisten.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser en JSON-liste med pakker. Feil rapporteres med sti til feltet.
pub fn parse_packages(json_in: &str) -> Result<Vec<Package>, StorageError> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| StorageError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Leser inn pakker fra disk (JSON).
pub fn load_packages(path: &str) -> Result<Vec<Package>, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_string(),
        source,
    })?;
    let packages = parse_packages(&contents)?;
    log::info!("loaded {} packages from {}", packages.len(), path);
    Ok(packages)
}

/// Lagrer pakker til disk som JSON (pretty-print).
pub fn save_packages(packages: &[Package], path: &str) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(packages)?;
    std::fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("saved {} packages to {}", packages.len(), path);
    Ok(())
}
