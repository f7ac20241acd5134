use crate::{
    models::participant::QueuedParticipant,
    repositories::queue_repository::QueueRepository,
    services::{errors::queue_service_errors::QueueServiceError, match_service::MatchService},
};

/// Strict first-come-first-served matchmaking: no rating, no priority.
#[derive(Debug, Default)]
pub struct QueueService {
    repository: QueueRepository,
}

impl QueueService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the participant and, once two connections are waiting, returns
    /// the two oldest as `(p1, p2)`.
    pub fn join_queue(
        &mut self,
        participant: QueuedParticipant,
        matches: &MatchService,
    ) -> Result<Option<(QueuedParticipant, QueuedParticipant)>, QueueServiceError> {
        if participant.connection_id.is_empty() {
            return Err(QueueServiceError::ValidationError(
                "Connection ID cannot be empty".to_string(),
            ));
        }

        if let Some(live_match) = matches.match_for_player(&participant.connection_id) {
            return Err(QueueServiceError::AlreadyInMatch(
                live_match.room_id.clone(),
            ));
        }

        self.repository.push(participant);
        Ok(self.take_pair())
    }

    fn take_pair(&mut self) -> Option<(QueuedParticipant, QueuedParticipant)> {
        loop {
            if self.repository.count() < 2 {
                return None;
            }

            let first = self.repository.pop_oldest()?;
            let second = self.repository.pop_oldest()?;

            // Same connection queued twice: keep only the newer entry.
            if first.connection_id == second.connection_id {
                self.repository.push_oldest(second);
                continue;
            }

            self.repository.remove_by_connection(&first.connection_id);
            self.repository.remove_by_connection(&second.connection_id);
            return Some((first, second));
        }
    }

    pub fn leave_queue(&mut self, connection_id: &str) -> usize {
        self.repository.remove_by_connection(connection_id)
    }

    pub fn is_queued(&self, connection_id: &str) -> bool {
        self.repository.contains(connection_id)
    }

    pub fn waiting(&self) -> usize {
        self.repository.count()
    }

    pub fn waiting_connection_ids(&self) -> Vec<String> {
        self.repository.connection_ids()
    }
}
