pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod json_api;
pub mod message;
pub mod metrics;
pub mod models;
pub mod storage;

#[cfg(feature = "python")]
mod py;

pub use cli::{print_training_report, process_package, run_packages, RunSummary};
pub use dispatch::{read_package, WorkoutCode};
pub use errors::{StorageError, WorkoutError};
pub use message::InfoMessage;
pub use models::{Measurements, Running, SportsWalking, Swimming, Training, Workout};
pub use storage::{default_packages, load_packages, parse_packages, save_packages, Package};
