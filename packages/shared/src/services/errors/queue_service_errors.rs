#[derive(Debug, PartialEq)]
pub enum QueueServiceError {
    ValidationError(String),
    AlreadyInMatch(String),
}

impl std::fmt::Display for QueueServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            QueueServiceError::AlreadyInMatch(room_id) => {
                write!(f, "Connection is already playing in {}", room_id)
            }
        }
    }
}

impl std::error::Error for QueueServiceError {}
