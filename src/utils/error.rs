use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

impl WaitError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            WaitError::Io(e) => format!("Could not write output: {}", e),
            WaitError::InvalidParameter { field, value, reason } => {
                format!("--{} {} is not accepted: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WaitError::Io(_) => "Check that standard output is still open (for example, not a closed pipe)",
            WaitError::InvalidParameter { .. } => "Pass a whole number of seconds that is zero or greater",
        }
    }
}

pub type Result<T> = std::result::Result<T, WaitError>;
