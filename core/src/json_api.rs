// JSON inn/ut rundt dispatcher og reporter. Brukes av Python-bindingen.
use serde_json as json;
use serde_path_to_error as spte;

use crate::cli::process_package;
use crate::dispatch::read_package;
use crate::models::Training;
use crate::storage::{parse_packages, Package};

fn parse_data(data_json: &str) -> Result<Vec<f64>, String> {
    let mut de = json::Deserializer::from_str(data_json);
    spte::deserialize(&mut de).map_err(|e| format!("data parse at {}: {}", e.path(), e.inner()))
}

/// Én kode + JSON-liste -> ferdig meldingslinje.
pub fn call_read_package_from_json(code: &str, data_json: &str) -> Result<String, String> {
    let data = parse_data(data_json)?;
    let workout = read_package(code, &data).map_err(|e| e.to_string())?;
    Ok(workout.show_training_info().get_message())
}

/// Som over, men InfoMessage serialisert som JSON.
pub fn call_training_info_from_json(code: &str, data_json: &str) -> Result<String, String> {
    let data = parse_data(data_json)?;
    let info = process_package(&Package { code: code.to_string(), data }).map_err(|e| e.to_string())?;
    json::to_string(&info).map_err(|e| e.to_string())
}

/// Liste med pakker -> én linje per pakke. Første feil avbryter hele kallet
/// (blir ValueError i Python), i motsetning til `run_packages`.
pub fn call_report_packages_from_json(packages_json: &str) -> Result<Vec<String>, String> {
    let packages = parse_packages(packages_json).map_err(|e| e.to_string())?;
    packages
        .iter()
        .map(|p| {
            process_package(p)
                .map(|info| info.get_message())
                .map_err(|e| format!("package {}: {e}", p.code))
        })
        .collect()
}
