use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("{0}")]
    Validation(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("expected {expected} argument(s), got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("not enough arguments")]
    MissingArguments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl AbookError {
    /// Variant name used by the catch-all session message.
    pub fn kind(&self) -> &'static str {
        match self {
            AbookError::Validation(_) => "Validation",
            AbookError::ContactNotFound(_) => "ContactNotFound",
            AbookError::ArgumentCount { .. } => "ArgumentCount",
            AbookError::MissingArguments => "MissingArguments",
            AbookError::Io(_) => "Io",
            AbookError::Serialization(_) => "Serialization",
            AbookError::Snapshot(_) => "Snapshot",
        }
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
