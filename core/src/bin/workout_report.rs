use anyhow::{bail, Result};

use workout_core::{default_packages, print_training_report};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let summary = print_training_report(&default_packages())?;
    if !summary.is_ok() {
        bail!("{} of {} packages failed", summary.failed.len(), summary.printed + summary.failed.len());
    }
    Ok(())
}
