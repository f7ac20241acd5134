use shared::models::events::ServerEvent;
use tracing::debug;

use crate::arena::Arena;

/// Operator subscription: an immediate snapshot now, and another one after
/// every change to the registry.
pub fn handle_subscribe(arena: &mut Arena, connection_id: &str) {
    if arena.hub.subscribe(connection_id) {
        debug!("Operator subscribed: {}", connection_id);
    }
    arena.hub.send_to(
        connection_id,
        ServerEvent::LiveMatchesList(arena.matches.snapshot().clone()),
    );
}
