use std::collections::HashMap;

use crate::models::live_match::LiveMatch;

/// In-memory registry of live matches keyed by room id.
#[derive(Debug, Default)]
pub struct MatchRepository {
    matches: HashMap<String, LiveMatch>,
    active_matches: usize,
}

impl MatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the match unless its room id is already taken.
    pub fn insert(&mut self, live_match: LiveMatch) -> bool {
        if self.matches.contains_key(&live_match.room_id) {
            return false;
        }
        self.matches.insert(live_match.room_id.clone(), live_match);
        self.active_matches += 1;
        true
    }

    pub fn get(&self, room_id: &str) -> Option<&LiveMatch> {
        self.matches.get(room_id)
    }

    pub fn get_mut(&mut self, room_id: &str) -> Option<&mut LiveMatch> {
        self.matches.get_mut(room_id)
    }

    pub fn remove(&mut self, room_id: &str) -> Option<LiveMatch> {
        let removed = self.matches.remove(room_id)?;
        self.active_matches = self.active_matches.saturating_sub(1);
        Some(removed)
    }

    pub fn find_by_player(&self, connection_id: &str) -> Option<&LiveMatch> {
        self.matches
            .values()
            .find(|live_match| live_match.has_player(connection_id))
    }

    pub fn all(&self) -> &HashMap<String, LiveMatch> {
        &self.matches
    }

    pub fn active_matches(&self) -> usize {
        self.active_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::participant::QueuedParticipant;

    fn sample_match(a: &str, b: &str) -> LiveMatch {
        LiveMatch::new(
            &QueuedParticipant::new(a, "Alice"),
            &QueuedParticipant::new(b, "Bob"),
            "text",
        )
    }

    #[test]
    fn test_insert_rejects_duplicate_room() {
        let mut repository = MatchRepository::new();

        assert!(repository.insert(sample_match("a", "b")));
        assert!(!repository.insert(sample_match("a", "b")));
        assert_eq!(repository.all().len(), 1);
        assert_eq!(repository.active_matches(), 1);
    }

    #[test]
    fn test_remove_floors_counter_at_zero() {
        let mut repository = MatchRepository::new();
        repository.insert(sample_match("a", "b"));

        assert!(repository.remove("room_a_b").is_some());
        assert!(repository.remove("room_a_b").is_none());
        assert_eq!(repository.active_matches(), 0);
    }

    #[test]
    fn test_find_by_player() {
        let mut repository = MatchRepository::new();
        repository.insert(sample_match("a", "b"));
        repository.insert(sample_match("c", "d"));

        assert_eq!(
            repository.find_by_player("d").map(|m| m.room_id.as_str()),
            Some("room_c_d")
        );
        assert!(repository.find_by_player("e").is_none());
    }
}
