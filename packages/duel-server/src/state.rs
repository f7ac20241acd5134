use crate::arena::ArenaHandle;

#[derive(Clone)]
pub struct AppState {
    pub arena: ArenaHandle,
}
