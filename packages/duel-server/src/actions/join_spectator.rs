use tracing::debug;

use crate::arena::Arena;

/// Adds the connection to the room so it receives the room's broadcasts.
/// The room does not have to hold a match yet.
pub fn handle_join_spectator(arena: &mut Arena, connection_id: &str, room_id: &str) {
    if arena.hub.join_room(room_id, connection_id) {
        debug!("Connection {} spectating {}", connection_id, room_id);
    }
}
