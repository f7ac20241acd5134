use crate::models::live_match::MatchStatus;

#[derive(Debug, PartialEq)]
pub enum MatchServiceError {
    MatchNotFound(String),
    MatchAlreadyExists(String),
    InvalidState {
        room_id: String,
        status: MatchStatus,
    },
    NotAPlayer {
        room_id: String,
        connection_id: String,
    },
}

impl std::fmt::Display for MatchServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchServiceError::MatchNotFound(room_id) => write!(f, "Match not found: {}", room_id),
            MatchServiceError::MatchAlreadyExists(room_id) => {
                write!(f, "Match already exists: {}", room_id)
            }
            MatchServiceError::InvalidState { room_id, status } => {
                write!(f, "Match {} is {}", room_id, status)
            }
            MatchServiceError::NotAPlayer {
                room_id,
                connection_id,
            } => write!(
                f,
                "Connection {} is not a player in {}",
                connection_id, room_id
            ),
        }
    }
}

impl std::error::Error for MatchServiceError {}
