use std::io::{self, Write};

use crate::dispatch::read_package;
use crate::errors::WorkoutError;
use crate::message::InfoMessage;
use crate::metrics;
use crate::models::Training;
use crate::storage::Package;

/// Oppsummering av en kjøring over flere pakker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub printed: usize,
    pub failed: Vec<(usize, WorkoutError)>,
}

impl RunSummary {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Pakke -> økt -> melding. Oppdaterer tellerne.
pub fn process_package(package: &Package) -> Result<InfoMessage, WorkoutError> {
    match read_package(&package.code, &package.data) {
        Ok(workout) => {
            let info = workout.show_training_info();
            metrics::workout_processed(&info.training_type);
            Ok(info)
        }
        Err(e) => {
            metrics::package_rejected(e.reason());
            Err(e)
        }
    }
}

/// Skriver én linje per vellykket pakke. En feilet pakke stopper ikke resten.
pub fn run_packages<W: Write>(packages: &[Package], out: &mut W) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for (idx, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok(info) => {
                writeln!(out, "{}", info.get_message())?;
                summary.printed += 1;
            }
            Err(e) => {
                log::error!("package #{idx} ({}): {e}", package.code);
                summary.failed.push((idx, e));
            }
        }
    }
    Ok(summary)
}

pub fn print_training_report(packages: &[Package]) -> io::Result<RunSummary> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    run_packages(packages, &mut lock)
}
