use std::sync::Arc;

use shared::{
    models::events::{ClientEvent, GameOver, ServerEvent},
    repositories::{
        errors::text_repository_errors::TextRepositoryError, text_repository::TextRepository,
    },
    services::{match_service::MatchService, queue_service::QueueService, text_service::TextService},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{actions, hub::{Hub, Outbound}};

/// Everything the event loop reacts to, in arrival order.
#[derive(Debug)]
pub enum Command {
    Connected {
        connection_id: String,
        sender: Outbound,
    },
    Event {
        connection_id: String,
        event: ClientEvent,
    },
    Disconnected {
        connection_id: String,
    },
    TextsLoaded(Result<Vec<String>, TextRepositoryError>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArenaSettings {
    pub finish_on_disconnect: bool,
}

/// Cheap, cloneable entry point used by connection tasks.
#[derive(Debug, Clone)]
pub struct ArenaHandle {
    commands: UnboundedSender<Command>,
}

impl ArenaHandle {
    /// Registers a new connection and returns the id assigned to it.
    pub fn connect(&self, sender: Outbound) -> String {
        let connection_id = Uuid::new_v4().to_string();
        self.send(Command::Connected {
            connection_id: connection_id.clone(),
            sender,
        });
        connection_id
    }

    pub fn dispatch(&self, connection_id: &str, event: ClientEvent) {
        self.send(Command::Event {
            connection_id: connection_id.to_string(),
            event,
        });
    }

    pub fn disconnect(&self, connection_id: &str) {
        self.send(Command::Disconnected {
            connection_id: connection_id.to_string(),
        });
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            error!("Arena event loop is not running, dropping command");
        }
    }
}

/// Single owner of the queue, the match registry, the text cache and the
/// connection hub. Commands are handled one at a time and to completion, so
/// no handler ever observes another one half-way through.
pub struct Arena {
    pub(crate) queue: QueueService,
    pub(crate) matches: MatchService,
    pub(crate) texts: TextService,
    pub(crate) hub: Hub,
    pub(crate) settings: ArenaSettings,
    text_repository: Arc<dyn TextRepository>,
    commands: UnboundedSender<Command>,
}

impl Arena {
    pub fn new(
        settings: ArenaSettings,
        text_repository: Arc<dyn TextRepository>,
    ) -> (Self, UnboundedReceiver<Command>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let arena = Arena {
            queue: QueueService::new(),
            matches: MatchService::new(),
            texts: TextService::new(),
            hub: Hub::new(),
            settings,
            text_repository,
            commands,
        };
        (arena, receiver)
    }

    pub fn handle(&self) -> ArenaHandle {
        ArenaHandle {
            commands: self.commands.clone(),
        }
    }

    /// Loads the texts once, then processes commands for the life of the server.
    pub async fn run(mut self, mut commands: UnboundedReceiver<Command>) {
        info!("Arena event loop started");
        self.refresh_texts();

        while let Some(command) = commands.recv().await {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Connected {
                connection_id,
                sender,
            } => {
                debug!("Connection registered: {}", connection_id);
                self.hub.register(&connection_id, sender);
            }
            Command::Event {
                connection_id,
                event,
            } => self.route_event(&connection_id, event),
            Command::Disconnected { connection_id } => {
                actions::disconnect::handle_disconnect(self, &connection_id)
            }
            Command::TextsLoaded(result) => actions::refresh_texts::handle_texts_loaded(self, result),
        }
    }

    fn route_event(&mut self, connection_id: &str, event: ClientEvent) {
        debug!("Routing event from {}: {:?}", connection_id, event);
        match event {
            ClientEvent::JoinQueue(request) => {
                actions::join_queue::handle_join_queue(self, connection_id, request)
            }
            ClientEvent::AdminStartMatch(room_id) => {
                actions::start_match::handle_start_match(self, connection_id, &room_id)
            }
            ClientEvent::TypeUpdate(request) => {
                actions::type_update::handle_type_update(self, connection_id, request)
            }
            ClientEvent::JoinSpectator(room_id) => {
                actions::join_spectator::handle_join_spectator(self, connection_id, &room_id)
            }
            ClientEvent::GameFinish(request) => {
                actions::game_finish::handle_game_finish(self, connection_id, &request.room_id)
            }
            ClientEvent::AdminRefreshTexts => self.refresh_texts(),
            ClientEvent::AdminSubscribe => actions::subscribe::handle_subscribe(self, connection_id),
        }
    }

    /// Queries the text provider off the loop; the result comes back as
    /// `Command::TextsLoaded`. Matches created meanwhile use the old cache.
    pub(crate) fn refresh_texts(&self) {
        let repository = Arc::clone(&self.text_repository);
        let commands = self.commands.clone();
        tokio::spawn(async move {
            let result = repository.fetch_all().await;
            if commands.send(Command::TextsLoaded(result)).is_err() {
                debug!("Arena stopped before texts were loaded");
            }
        });
    }

    /// Removes the match, tells everyone else in the room and refreshes the
    /// operators' view.
    pub(crate) fn finish_match(&mut self, room_id: &str, initiator: &str) -> bool {
        let finished = match self.matches.finish(room_id) {
            Ok(finished) => finished,
            Err(e) => {
                debug!("Ignoring finish from {}: {}", initiator, e);
                return false;
            }
        };

        self.hub.broadcast_room_except(
            &finished.room_id,
            initiator,
            ServerEvent::GameOver(GameOver { winner: false }),
        );
        self.hub.dissolve_room(&finished.room_id);

        info!(
            "Match finished: {} ({} active)",
            finished.room_id,
            self.matches.active_matches()
        );
        self.publish_snapshot();
        true
    }

    pub(crate) fn publish_snapshot(&self) {
        if self.hub.has_subscribers() {
            self.hub
                .notify_subscribers(ServerEvent::LiveMatchesList(self.matches.snapshot().clone()));
        }
    }
}
