use thiserror::Error;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Render failure: {message}")]
    RenderFailure { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StandingsError {
    pub fn render_failure(message: impl Into<String>) -> Self {
        Self::RenderFailure {
            message: message.into(),
        }
    }

    /// Short message for the terminal, without the variant prefix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RenderFailure { message } => format!("Could not render standings: {}", message),
            Self::ValidationError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
            Self::SerializationError(e) => format!("Standings data is malformed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandingsError>;
