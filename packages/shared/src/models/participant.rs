use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A connection waiting in the matchmaking queue, together with whatever
/// metadata the client sent alongside its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedParticipant {
    pub connection_id: String,
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl QueuedParticipant {
    pub fn new(connection_id: &str, name: &str) -> Self {
        QueuedParticipant {
            connection_id: connection_id.to_string(),
            name: name.to_string(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Live per-player state inside a match. Only the owning player's
/// progress events mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub name: String,
    pub wpm: f64,
    pub progress: f64,
    pub input: String,
    pub accuracy: f64,
}

impl PlayerState {
    pub fn new(participant: &QueuedParticipant) -> Self {
        PlayerState {
            id: participant.connection_id.clone(),
            name: participant.name.clone(),
            wpm: 0.0,
            progress: 0.0,
            input: String::new(),
            accuracy: 0.0,
        }
    }
}
