pub mod events;
pub mod live_match;
pub mod participant;

pub use live_match::{derive_room_id, LiveMatch, MatchStatus, ProgressUpdate};
pub use participant::{PlayerState, QueuedParticipant};
