use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::participant::{PlayerState, QueuedParticipant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Waiting,
    InProgress,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Waiting => write!(f, "WAITING"),
            MatchStatus::InProgress => write!(f, "IN_PROGRESS"),
        }
    }
}

/// Client-reported typing progress. Values are taken as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub wpm: f64,
    pub progress: f64,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub accuracy: f64,
}

/// Derives the room identifier for a pair of connections.
///
/// The first argument is always the participant that was dequeued first
/// (the older queue entry), so the same pair yields the same id for the
/// whole lifetime of the match.
pub fn derive_room_id(first_connection_id: &str, second_connection_id: &str) -> String {
    format!("room_{}_{}", first_connection_id, second_connection_id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub room_id: String,
    pub status: MatchStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub start_time: Option<DateTime<Utc>>,
    pub text: String,
    pub p1: PlayerState,
    pub p2: PlayerState,
}

impl LiveMatch {
    pub fn new(p1: &QueuedParticipant, p2: &QueuedParticipant, text: &str) -> Self {
        LiveMatch {
            room_id: derive_room_id(&p1.connection_id, &p2.connection_id),
            status: MatchStatus::Waiting,
            created_at: Utc::now(),
            start_time: None,
            text: text.to_string(),
            p1: PlayerState::new(p1),
            p2: PlayerState::new(p2),
        }
    }

    /// Moves the match to IN_PROGRESS. Callers check the status first.
    pub fn start(&mut self, now: DateTime<Utc>) {
        // startTime never precedes createdAt, even if the wall clock stepped back
        self.start_time = Some(now.max(self.created_at));
        self.status = MatchStatus::InProgress;
    }

    pub fn has_player(&self, connection_id: &str) -> bool {
        self.p1.id == connection_id || self.p2.id == connection_id
    }

    pub fn player_mut(&mut self, connection_id: &str) -> Option<&mut PlayerState> {
        if self.p1.id == connection_id {
            Some(&mut self.p1)
        } else if self.p2.id == connection_id {
            Some(&mut self.p2)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, connection_id: &str) -> Option<&PlayerState> {
        if self.p1.id == connection_id {
            Some(&self.p2)
        } else if self.p2.id == connection_id {
            Some(&self.p1)
        } else {
            None
        }
    }
}

impl PlayerState {
    pub fn apply(&mut self, update: &ProgressUpdate) {
        self.wpm = update.wpm;
        self.progress = update.progress;
        self.input = update.input.clone();
        self.accuracy = update.accuracy;
    }
}
