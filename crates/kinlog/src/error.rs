use kinlog_core::storage::RepositoryError;

/// Error type for CLI commands.
///
/// Splits "not found" from every other failure so the process can report
/// them with different exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{entity_type} {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code: 1 for a missing entity, 2 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 1,
            Self::InvalidInput(_) | Self::Other(_) => 2,
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Other(other.into()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
