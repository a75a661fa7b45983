use thiserror::Error;

pub type IntakeResult<T> = Result<T, IntakeError>;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Flow '{0}' has no steps")]
    EmptyFlow(String),

    #[error("Flow '{flow}' references unknown step '{step}'")]
    UnknownStep { flow: String, step: String },

    #[error("Step '{0}' is already registered")]
    DuplicateStep(String),

    #[error("Unknown flow '{0}'")]
    UnknownFlow(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
