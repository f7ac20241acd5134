use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::live_match::{LiveMatch, ProgressUpdate};

/// Frames sent by players, spectators and operators.
///
/// On the wire every frame is `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    JoinQueue(JoinQueueRequest),
    AdminStartMatch(String),
    TypeUpdate(TypeUpdateRequest),
    JoinSpectator(String),
    GameFinish(GameFinishRequest),
    AdminRefreshTexts,
    AdminSubscribe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinQueueRequest {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeUpdateRequest {
    pub room_id: String,
    #[serde(flatten)]
    pub progress: ProgressUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFinishRequest {
    pub room_id: String,
}

/// Frames pushed to connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    WaitingForAdmin(WaitingForAdmin),
    MatchFound(MatchFound),
    OpponentUpdate(OpponentUpdate),
    SpectatorUpdate(LiveMatch),
    GameOver(GameOver),
    LiveMatchesList(HashMap<String, LiveMatch>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingForAdmin {
    pub room_id: String,
    pub p1: String,
    pub p2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFound {
    pub room_id: String,
    pub opponent_name: String,
    pub text: String,
    pub p1: String,
    pub p2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentUpdate {
    pub progress: f64,
    pub wpm: f64,
    pub accuracy: f64,
}

impl From<&ProgressUpdate> for OpponentUpdate {
    fn from(update: &ProgressUpdate) -> Self {
        OpponentUpdate {
            progress: update.progress,
            wpm: update.wpm,
            accuracy: update.accuracy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOver {
    pub winner: bool,
}
