use crate::arena::Arena;

pub fn handle_game_finish(arena: &mut Arena, connection_id: &str, room_id: &str) {
    arena.finish_match(room_id, connection_id);
}
