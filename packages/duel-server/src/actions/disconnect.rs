use tracing::info;

use crate::arena::Arena;

/// Drops the connection from the queue and the hub. A match it was playing
/// in is only finished when `finish_on_disconnect` is set; otherwise it
/// stays in the registry untouched.
pub fn handle_disconnect(arena: &mut Arena, connection_id: &str) {
    let removed = arena.queue.leave_queue(connection_id);

    if arena.settings.finish_on_disconnect {
        let room_id = arena
            .matches
            .match_for_player(connection_id)
            .map(|live_match| live_match.room_id.clone());
        if let Some(room_id) = room_id {
            arena.finish_match(&room_id, connection_id);
        }
    }

    arena.hub.unregister(connection_id);
    info!(
        "Connection closed: {} ({} queue entries removed, {} connections)",
        connection_id,
        removed,
        arena.hub.connection_count()
    );
}
