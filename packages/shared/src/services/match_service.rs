use std::collections::HashMap;

use chrono::Utc;

use crate::{
    models::{
        live_match::{LiveMatch, MatchStatus, ProgressUpdate},
        participant::QueuedParticipant,
    },
    repositories::match_repository::MatchRepository,
    services::errors::match_service_errors::MatchServiceError,
};

/// Owns the match registry and every status transition of a match.
#[derive(Debug, Default)]
pub struct MatchService {
    repository: MatchRepository,
}

impl MatchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a WAITING match for a freshly dequeued pair.
    pub fn create(
        &mut self,
        p1: &QueuedParticipant,
        p2: &QueuedParticipant,
        text: &str,
    ) -> Result<LiveMatch, MatchServiceError> {
        let live_match = LiveMatch::new(p1, p2, text);
        if !self.repository.insert(live_match.clone()) {
            return Err(MatchServiceError::MatchAlreadyExists(live_match.room_id));
        }
        Ok(live_match)
    }

    /// WAITING -> IN_PROGRESS, stamping the start time.
    pub fn start_match(&mut self, room_id: &str) -> Result<&LiveMatch, MatchServiceError> {
        let live_match = self
            .repository
            .get_mut(room_id)
            .ok_or_else(|| MatchServiceError::MatchNotFound(room_id.to_string()))?;

        if live_match.status != MatchStatus::Waiting {
            return Err(MatchServiceError::InvalidState {
                room_id: room_id.to_string(),
                status: live_match.status,
            });
        }

        live_match.start(Utc::now());
        Ok(live_match)
    }

    /// Records a player's progress. Only IN_PROGRESS matches accept updates,
    /// and only from one of their two players.
    pub fn apply_progress(
        &mut self,
        room_id: &str,
        connection_id: &str,
        update: &ProgressUpdate,
    ) -> Result<&LiveMatch, MatchServiceError> {
        let live_match = self
            .repository
            .get_mut(room_id)
            .ok_or_else(|| MatchServiceError::MatchNotFound(room_id.to_string()))?;

        if live_match.status != MatchStatus::InProgress {
            return Err(MatchServiceError::InvalidState {
                room_id: room_id.to_string(),
                status: live_match.status,
            });
        }

        let player = live_match
            .player_mut(connection_id)
            .ok_or_else(|| MatchServiceError::NotAPlayer {
                room_id: room_id.to_string(),
                connection_id: connection_id.to_string(),
            })?;
        player.apply(update);

        Ok(live_match)
    }

    /// Removes the match whatever its status and hands it back.
    pub fn finish(&mut self, room_id: &str) -> Result<LiveMatch, MatchServiceError> {
        self.repository
            .remove(room_id)
            .ok_or_else(|| MatchServiceError::MatchNotFound(room_id.to_string()))
    }

    pub fn get(&self, room_id: &str) -> Option<&LiveMatch> {
        self.repository.get(room_id)
    }

    pub fn match_for_player(&self, connection_id: &str) -> Option<&LiveMatch> {
        self.repository.find_by_player(connection_id)
    }

    /// Current registry contents, valid until the next mutation.
    pub fn snapshot(&self) -> &HashMap<String, LiveMatch> {
        self.repository.all()
    }

    pub fn active_matches(&self) -> usize {
        self.repository.active_matches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_match() -> MatchService {
        let mut service = MatchService::new();
        service
            .create(
                &QueuedParticipant::new("a", "Alice"),
                &QueuedParticipant::new("b", "Bob"),
                "The quick brown fox",
            )
            .unwrap();
        service
    }

    fn update(progress: f64) -> ProgressUpdate {
        ProgressUpdate {
            wpm: 60.0,
            progress,
            input: "The".to_string(),
            accuracy: 95.0,
        }
    }

    #[test]
    fn test_create_stores_waiting_match() {
        let service = service_with_match();
        let live_match = service.get("room_a_b").unwrap();

        assert_eq!(live_match.status, MatchStatus::Waiting);
        assert_eq!(live_match.text, "The quick brown fox");
        assert_eq!(service.active_matches(), 1);
    }

    #[test]
    fn test_create_rejects_existing_room() {
        let mut service = service_with_match();

        let result = service.create(
            &QueuedParticipant::new("a", "Alice"),
            &QueuedParticipant::new("b", "Bob"),
            "other",
        );

        assert_eq!(
            result,
            Err(MatchServiceError::MatchAlreadyExists("room_a_b".to_string()))
        );
        assert_eq!(service.get("room_a_b").unwrap().text, "The quick brown fox");
    }

    #[test]
    fn test_start_match_sets_start_time() {
        let mut service = service_with_match();

        let live_match = service.start_match("room_a_b").unwrap();

        assert_eq!(live_match.status, MatchStatus::InProgress);
        let start_time = live_match.start_time.unwrap();
        assert!(start_time >= live_match.created_at);
    }

    #[test]
    fn test_start_match_only_from_waiting() {
        let mut service = service_with_match();
        service.start_match("room_a_b").unwrap();
        let first_start = service.get("room_a_b").unwrap().start_time;

        let result = service.start_match("room_a_b");

        assert_eq!(
            result.unwrap_err(),
            MatchServiceError::InvalidState {
                room_id: "room_a_b".to_string(),
                status: MatchStatus::InProgress,
            }
        );
        assert_eq!(service.get("room_a_b").unwrap().start_time, first_start);
    }

    #[test]
    fn test_start_unknown_match_leaves_registry_untouched() {
        let mut service = service_with_match();
        let before = service.snapshot().clone();

        let result = service.start_match("room_x_y");

        assert_eq!(
            result.unwrap_err(),
            MatchServiceError::MatchNotFound("room_x_y".to_string())
        );
        assert_eq!(service.snapshot(), &before);
    }

    #[test]
    fn test_progress_ignored_while_waiting() {
        let mut service = service_with_match();

        let result = service.apply_progress("room_a_b", "a", &update(50.0));

        assert!(matches!(result, Err(MatchServiceError::InvalidState { .. })));
        assert_eq!(service.get("room_a_b").unwrap().p1.progress, 0.0);
    }

    #[test]
    fn test_progress_ignored_from_non_player() {
        let mut service = service_with_match();
        service.start_match("room_a_b").unwrap();
        let before = service.get("room_a_b").unwrap().clone();

        let result = service.apply_progress("room_a_b", "spectator", &update(50.0));

        assert!(matches!(result, Err(MatchServiceError::NotAPlayer { .. })));
        assert_eq!(service.get("room_a_b").unwrap(), &before);
    }

    #[test]
    fn test_progress_updates_only_sender() {
        let mut service = service_with_match();
        service.start_match("room_a_b").unwrap();

        let live_match = service.apply_progress("room_a_b", "b", &update(25.0)).unwrap();

        assert_eq!(live_match.p2.progress, 25.0);
        assert_eq!(live_match.p2.wpm, 60.0);
        assert_eq!(live_match.p2.accuracy, 95.0);
        assert_eq!(live_match.p1.progress, 0.0);
    }

    #[test]
    fn test_finish_removes_match_in_any_state() {
        let mut service = service_with_match();

        let finished = service.finish("room_a_b").unwrap();

        assert_eq!(finished.room_id, "room_a_b");
        assert!(service.snapshot().get("room_a_b").is_none());
        assert_eq!(service.active_matches(), 0);
        assert_eq!(
            service.finish("room_a_b").unwrap_err(),
            MatchServiceError::MatchNotFound("room_a_b".to_string())
        );
        assert_eq!(service.active_matches(), 0);
    }

    #[test]
    fn test_match_for_player() {
        let service = service_with_match();

        assert!(service.match_for_player("a").is_some());
        assert!(service.match_for_player("b").is_some());
        assert!(service.match_for_player("c").is_none());
    }
}
