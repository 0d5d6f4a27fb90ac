use crate::app_context::{AppContext, RequestContext};
use crate::rounds::message_types::ServerSentSocketMessage;
use crate::rounds::models::{RoundError, RoundEvent, RoundOutcome, RoundState};
use crate::storage::interface::IRoundStorage;
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

/// Streams the countdown and the final result of one round to one client. The socket is
/// closed by the server once the round is locked.
pub struct RoundWsHandler {
    request_context: RequestContext,
    events: broadcast::Receiver<RoundEvent>,
    finished: Option<RoundOutcome>,
}

impl RoundWsHandler {
    pub async fn connect<RS: IRoundStorage>(
        app_context: AppContext<RS>,
        request_context: RequestContext,
    ) -> Result<Self, RoundError> {
        // Subscribe before looking at the state so a lock in between is not missed.
        let events = app_context
            .rounds
            .subscribe(&request_context.round_id)
            .await?;
        let snapshot = app_context
            .rounds
            .snapshot(&request_context.round_id)
            .await?;
        let finished = match snapshot.state {
            RoundState::Locked => snapshot.outcome,
            RoundState::NotStarted | RoundState::InProgress => None,
        };
        Ok(Self {
            request_context,
            events,
            finished,
        })
    }

    pub async fn on_client_connected(mut self, socket: WebSocket) {
        let round_id = self.request_context.round_id.clone();
        tracing::debug!(round_id = %round_id, "Round watcher connected.");
        let (mut client_tx, mut client_rx) = socket.split();
        if let Some(outcome) = self.finished.take() {
            send(&mut client_tx, RoundEvent::Finished(outcome)).await;
            let _ = client_tx.close().await;
            return;
        }
        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Ok(event) => {
                        let is_final = matches!(event, RoundEvent::Finished(_));
                        if !send(&mut client_tx, event).await || is_final {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(round_id = %round_id, skipped, "Round watcher lagged.");
                    }
                    Err(RecvError::Closed) => break,
                },
                incoming = client_rx.next() => match incoming {
                    // Clients have nothing to say over this socket.
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::debug!(round_id = %round_id, %error, "Round watcher errored.");
                        break;
                    }
                },
            }
        }
        let _ = client_tx.close().await;
        tracing::debug!(round_id = %round_id, "Round watcher disconnected.");
    }
}

/// Returns `false` once the client can no longer be written to.
async fn send(client_tx: &mut SplitSink<WebSocket, Message>, event: RoundEvent) -> bool {
    let raw_message = match serde_json::to_string(&ServerSentSocketMessage::from(event)) {
        Ok(raw_message) => raw_message,
        Err(error) => {
            tracing::error!(%error, "Failed to serialize a round event.");
            return true;
        }
    };
    match client_tx.send(Message::Text(raw_message)).await {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(%error, "Failed to write to a round watcher.");
            false
        }
    }
}
