use thiserror::Error;

/// Conditions that end a run before a result is printed.
#[derive(Debug, Error, PartialEq)]
pub enum DofError {
    #[error("invalid camera selection: {index}")]
    InvalidCameraSelection { index: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("usage: dof [opts] focal near [far]: {0}")]
    MissingRequiredArguments(String),

    #[error("circle of confusion must be a positive number, got {0}")]
    InvalidCoc(f64),
}

impl DofError {
    /// Process exit status for this condition. Usage failures share clap's 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            DofError::MissingRequiredArguments(_) => 2,
            DofError::InvalidCameraSelection { .. } => 3,
            DofError::InvalidInput(_) | DofError::InvalidCoc(_) => 1,
        }
    }
}
