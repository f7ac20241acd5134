use std::collections::VecDeque;

use crate::models::participant::QueuedParticipant;

/// In-memory FIFO waiting list. Oldest entry at the front.
#[derive(Debug, Default)]
pub struct QueueRepository {
    entries: VecDeque<QueuedParticipant>,
}

impl QueueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, participant: QueuedParticipant) {
        self.entries.push_back(participant);
    }

    pub fn pop_oldest(&mut self) -> Option<QueuedParticipant> {
        self.entries.pop_front()
    }

    pub fn push_oldest(&mut self, participant: QueuedParticipant) {
        self.entries.push_front(participant);
    }

    /// Removes every entry for the connection and returns how many were dropped.
    pub fn remove_by_connection(&mut self, connection_id: &str) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.connection_id != connection_id);
        before - self.entries.len()
    }

    pub fn contains(&self, connection_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.connection_id == connection_id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn connection_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.connection_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_in_arrival_order() {
        let mut repository = QueueRepository::new();
        repository.push(QueuedParticipant::new("a", "Alice"));
        repository.push(QueuedParticipant::new("b", "Bob"));

        assert_eq!(repository.pop_oldest().unwrap().connection_id, "a");
        assert_eq!(repository.pop_oldest().unwrap().connection_id, "b");
        assert!(repository.pop_oldest().is_none());
    }

    #[test]
    fn test_remove_by_connection_drops_all_entries() {
        let mut repository = QueueRepository::new();
        repository.push(QueuedParticipant::new("a", "Alice"));
        repository.push(QueuedParticipant::new("b", "Bob"));
        repository.push(QueuedParticipant::new("a", "Alice again"));

        assert_eq!(repository.remove_by_connection("a"), 2);
        assert_eq!(repository.connection_ids(), vec!["b".to_string()]);
        assert_eq!(repository.remove_by_connection("missing"), 0);
    }

    #[test]
    fn test_push_oldest_goes_to_front() {
        let mut repository = QueueRepository::new();
        repository.push(QueuedParticipant::new("b", "Bob"));
        repository.push_oldest(QueuedParticipant::new("a", "Alice"));

        assert_eq!(repository.connection_ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(repository.contains("a"));
        assert_eq!(repository.count(), 2);
    }
}
