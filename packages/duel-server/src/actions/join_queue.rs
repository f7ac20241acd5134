use shared::models::{
    events::{JoinQueueRequest, ServerEvent, WaitingForAdmin},
    participant::QueuedParticipant,
};
use tracing::{debug, error, info, warn};

use crate::arena::Arena;

pub fn handle_join_queue(arena: &mut Arena, connection_id: &str, request: JoinQueueRequest) {
    close_abandoned_match(arena, connection_id);

    let requeued = arena.queue.is_queued(connection_id);
    let participant =
        QueuedParticipant::new(connection_id, &request.name).with_metadata(request.metadata);

    let pair = match arena.queue.join_queue(participant, &arena.matches) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Rejected join_queue from {}: {}", connection_id, e);
            return;
        }
    };

    let Some((p1, p2)) = pair else {
        if requeued {
            debug!("Connection {} queued again", connection_id);
        }
        debug!(
            "Connection {} queued ({} waiting)",
            connection_id,
            arena.queue.waiting()
        );
        return;
    };

    let text = arena.texts.pick_random();
    let live_match = match arena.matches.create(&p1, &p2, &text) {
        Ok(live_match) => live_match,
        Err(e) => {
            error!("Failed to create match: {}", e);
            return;
        }
    };

    arena.hub.join_room(&live_match.room_id, &p1.connection_id);
    arena.hub.join_room(&live_match.room_id, &p2.connection_id);

    info!(
        "Match created (waiting for operator): {} ({} active)",
        live_match.room_id,
        arena.matches.active_matches()
    );

    arena.hub.broadcast_room(
        &live_match.room_id,
        ServerEvent::WaitingForAdmin(WaitingForAdmin {
            room_id: live_match.room_id.clone(),
            p1: live_match.p1.name.clone(),
            p2: live_match.p2.name.clone(),
        }),
    );
    arena.publish_snapshot();
}

/// A match whose other player has disconnected can never finish on its own.
/// When the remaining player asks for a new opponent, that match is closed
/// so it no longer holds them.
fn close_abandoned_match(arena: &mut Arena, connection_id: &str) {
    let abandoned = arena
        .matches
        .match_for_player(connection_id)
        .and_then(|live_match| {
            let opponent = live_match.opponent_of(connection_id)?;
            (!arena.hub.is_connected(&opponent.id)).then(|| live_match.room_id.clone())
        });

    if let Some(room_id) = abandoned {
        info!(
            "Closing abandoned match {} for returning player {}",
            room_id, connection_id
        );
        arena.finish_match(&room_id, connection_id);
    }
}
