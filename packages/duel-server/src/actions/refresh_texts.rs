use shared::repositories::errors::text_repository_errors::TextRepositoryError;
use tracing::{error, info, warn};

use crate::arena::Arena;

/// Applies the outcome of a text provider query started by
/// `Arena::refresh_texts`.
pub fn handle_texts_loaded(arena: &mut Arena, result: Result<Vec<String>, TextRepositoryError>) {
    match result {
        Ok(texts) => {
            let count = texts.len();
            if arena.texts.replace(texts) {
                info!("Texts reloaded: {} passages", count);
            } else {
                warn!(
                    "Text provider returned no passages, keeping {} cached",
                    arena.texts.count()
                );
            }
        }
        Err(e) => error!(
            "Failed to refresh texts, keeping {} cached: {}",
            arena.texts.count(),
            e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{testing::*, Command};
    use shared::services::text_service::FALLBACK_TEXT;

    #[test]
    fn test_error_before_first_load_keeps_fallback() {
        let (mut arena, _commands) = arena();

        arena.handle_command(Command::TextsLoaded(Err(TextRepositoryError::Http(
            "connection refused".to_string(),
        ))));

        assert_eq!(arena.texts.texts(), &[FALLBACK_TEXT.to_string()]);
    }

    #[test]
    fn test_new_matches_draw_from_reloaded_texts() {
        let (mut arena, _commands) = arena();
        let _a = connect(&mut arena, "a");
        let _b = connect(&mut arena, "b");

        handle_texts_loaded(&mut arena, Ok(vec!["Only passage.".to_string()]));
        join(&mut arena, "a", "Alice");
        join(&mut arena, "b", "Bob");

        assert_eq!(arena.matches.get("room_a_b").unwrap().text, "Only passage.");
    }
}
