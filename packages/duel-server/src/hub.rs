use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use shared::models::events::ServerEvent;
use tokio::sync::mpsc::{error::TrySendError, Sender};
use tracing::{debug, warn};

/// Events buffered per connection before further ones are dropped.
pub const OUTBOUND_CAPACITY: usize = 64;

/// Outbound half of a connection; a writer task drains it into the socket.
pub type Outbound = Sender<Arc<ServerEvent>>;

/// Live connections, the rooms they joined and the operators watching the
/// registry. Delivery is fire-and-forget: a closed connection, or one whose
/// buffer is full, just misses the event.
#[derive(Debug, Default)]
pub struct Hub {
    connections: HashMap<String, Outbound>,
    rooms: HashMap<String, HashSet<String>>,
    subscribers: HashSet<String>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, connection_id: &str, sender: Outbound) {
        self.connections.insert(connection_id.to_string(), sender);
    }

    /// Forgets the connection everywhere: rooms, operator subscriptions and
    /// the outbound sender itself.
    pub fn unregister(&mut self, connection_id: &str) {
        self.connections.remove(connection_id);
        self.subscribers.remove(connection_id);
        self.rooms.retain(|_, members| {
            members.remove(connection_id);
            !members.is_empty()
        });
    }

    pub fn is_connected(&self, connection_id: &str) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn join_room(&mut self, room_id: &str, connection_id: &str) -> bool {
        if !self.is_connected(connection_id) {
            return false;
        }
        self.rooms
            .entry(room_id.to_string())
            .or_default()
            .insert(connection_id.to_string());
        true
    }

    pub fn dissolve_room(&mut self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    pub fn room_members(&self, room_id: &str) -> Vec<String> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn subscribe(&mut self, connection_id: &str) -> bool {
        if !self.is_connected(connection_id) {
            return false;
        }
        self.subscribers.insert(connection_id.to_string())
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    pub fn send_to(&self, connection_id: &str, event: ServerEvent) {
        self.deliver(connection_id, &Arc::new(event));
    }

    pub fn broadcast_room(&self, room_id: &str, event: ServerEvent) {
        let event = Arc::new(event);
        if let Some(members) = self.rooms.get(room_id) {
            for member in members {
                self.deliver(member, &event);
            }
        }
    }

    pub fn broadcast_room_except(&self, room_id: &str, excluded: &str, event: ServerEvent) {
        let event = Arc::new(event);
        if let Some(members) = self.rooms.get(room_id) {
            for member in members.iter().filter(|member| member.as_str() != excluded) {
                self.deliver(member, &event);
            }
        }
    }

    pub fn notify_subscribers(&self, event: ServerEvent) {
        let event = Arc::new(event);
        for subscriber in &self.subscribers {
            self.deliver(subscriber, &event);
        }
    }

    fn deliver(&self, connection_id: &str, event: &Arc<ServerEvent>) {
        match self.connections.get(connection_id) {
            Some(sender) => match sender.try_send(Arc::clone(event)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!("Connection {} is not keeping up, dropping event", connection_id)
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Connection {} closed, dropping event", connection_id)
                }
            },
            None => debug!("Connection {} not registered, dropping event", connection_id),
        }
    }
}
