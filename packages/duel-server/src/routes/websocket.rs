use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use shared::models::events::{ClientEvent, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{hub::OUTBOUND_CAPACITY, state::AppState};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::channel::<Arc<ServerEvent>>(OUTBOUND_CAPACITY);

    let connection_id = state.arena.connect(tx);
    info!("Connection opened: {}", connection_id);

    let writer_id = connection_id.clone();
    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let payload = match serde_json::to_string(event.as_ref()) {
                Ok(payload) => payload,
                Err(e) => {
                    error!("Failed to serialize event for {}: {}", writer_id, e);
                    continue;
                }
            };
            if sink.send(Message::Text(payload.into())).await.is_err() {
                debug!("Socket closed while writing to {}", writer_id);
                break;
            }
        }
    });

    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientEvent>(text.as_str()) {
                Ok(event) => state.arena.dispatch(&connection_id, event),
                Err(e) => warn!("Dropping malformed frame from {}: {}", connection_id, e),
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("WebSocket error on {}: {}", connection_id, e);
                break;
            }
        }
    }

    state.arena.disconnect(&connection_id);
    writer.abort();
    info!("Connection closed: {}", connection_id);
}
