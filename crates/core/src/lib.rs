pub mod answer;
pub mod config;
pub mod error;
pub mod snapshot;

pub use answer::TriState;
pub use config::AppConfig;
pub use error::{IntakeError, IntakeResult};
pub use snapshot::IntakeSnapshot;
