pub mod disconnect;
pub mod game_finish;
pub mod join_queue;
pub mod join_spectator;
pub mod refresh_texts;
pub mod start_match;
pub mod subscribe;
pub mod type_update;
