use rand::{seq::SliceRandom, Rng};

/// Used until the provider returns at least one passage.
pub const FALLBACK_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// Cached passages that new matches draw from. Never empty.
#[derive(Debug, Clone)]
pub struct TextService {
    texts: Vec<String>,
}

impl Default for TextService {
    fn default() -> Self {
        TextService {
            texts: vec![FALLBACK_TEXT.to_string()],
        }
    }
}

impl TextService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick_random(&self) -> String {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.texts
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_TEXT.to_string())
    }

    /// Swaps in a freshly fetched set. An empty set keeps the current cache
    /// and returns `false`.
    pub fn replace(&mut self, texts: Vec<String>) -> bool {
        if texts.is_empty() {
            return false;
        }
        self.texts = texts;
        true
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn count(&self) -> usize {
        self.texts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_starts_with_fallback() {
        let service = TextService::new();

        assert_eq!(service.texts(), &[FALLBACK_TEXT.to_string()]);
        assert_eq!(service.pick_random(), FALLBACK_TEXT);
    }

    #[test]
    fn test_replace_swaps_whole_set() {
        let mut service = TextService::new();

        assert!(service.replace(vec!["one".to_string(), "two".to_string()]));
        assert!(service.replace(vec!["three".to_string()]));

        assert_eq!(service.texts(), &["three".to_string()]);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_empty_result_keeps_cache() {
        let mut service = TextService::new();
        service.replace(vec!["one".to_string(), "two".to_string()]);

        assert!(!service.replace(Vec::new()));
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_picks_only_from_cache() {
        let mut service = TextService::new();
        service.replace(vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let text = service.pick_with(&mut rng);
            assert!(service.texts().contains(&text));
        }
    }
}
