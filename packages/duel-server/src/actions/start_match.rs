use shared::models::events::{MatchFound, ServerEvent};
use tracing::{debug, info};

use crate::arena::Arena;

/// Operator command: WAITING -> IN_PROGRESS. Unknown or already running
/// matches are ignored.
pub fn handle_start_match(arena: &mut Arena, connection_id: &str, room_id: &str) {
    let live_match = match arena.matches.start_match(room_id) {
        Ok(live_match) => live_match.clone(),
        Err(e) => {
            debug!("Ignoring admin_start_match from {}: {}", connection_id, e);
            return;
        }
    };

    info!("Match started by operator: {}", room_id);

    for member in arena.hub.room_members(room_id) {
        let opponent_name = match live_match.opponent_of(&member) {
            Some(opponent) => opponent.name.clone(),
            None => live_match.p2.name.clone(),
        };
        arena.hub.send_to(
            &member,
            ServerEvent::MatchFound(MatchFound {
                room_id: live_match.room_id.clone(),
                opponent_name,
                text: live_match.text.clone(),
                p1: live_match.p1.name.clone(),
                p2: live_match.p2.name.clone(),
            }),
        );
    }

    arena.publish_snapshot();
}
