use shared::models::events::{OpponentUpdate, ServerEvent, TypeUpdateRequest};
use tracing::debug;

use crate::arena::Arena;

/// A player's progress tick: the opponent gets the condensed numbers, the
/// whole room (players and spectators) gets the full match.
pub fn handle_type_update(arena: &mut Arena, connection_id: &str, request: TypeUpdateRequest) {
    let live_match =
        match arena
            .matches
            .apply_progress(&request.room_id, connection_id, &request.progress)
        {
            Ok(live_match) => live_match.clone(),
            Err(e) => {
                debug!("Ignoring type_update from {}: {}", connection_id, e);
                return;
            }
        };

    if let Some(opponent) = live_match.opponent_of(connection_id) {
        arena.hub.send_to(
            &opponent.id,
            ServerEvent::OpponentUpdate(OpponentUpdate::from(&request.progress)),
        );
    }

    arena
        .hub
        .broadcast_room(&request.room_id, ServerEvent::SpectatorUpdate(live_match));
}
