use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use crate::board::{trim_fragment, Board, GroupId, GroupRegistry};
use crate::error::BoardError;
use crate::models::{
    CombinedUpdatedMessage, GroupUpdateMessage, GroupUpdatedMessage, InitMessage, SendMessage,
    StateResponse,
};

/// Owns the board and fans every accepted update out to all connections.
///
/// All writes and their broadcasts happen under the board lock, so each
/// `group:updated` / `combined:updated` pair reaches every subscriber
/// back to back.
pub struct BroadcastHub {
    registry: Arc<GroupRegistry>,
    board: Mutex<Board>,
    events: broadcast::Sender<SendMessage>,
    connections: AtomicUsize,
}

impl BroadcastHub {
    pub fn new(registry: Arc<GroupRegistry>, capacity: usize) -> Self {
        let (events, _rx) = broadcast::channel(capacity.max(1));
        Self {
            board: Mutex::new(Board::new(registry.clone())),
            registry,
            events,
            connections: AtomicUsize::new(0),
        }
    }

    /// Build the `init` payload and subscribe to broadcasts in one step.
    pub async fn connect(
        &self,
        group: Option<GroupId>,
    ) -> (InitMessage, broadcast::Receiver<SendMessage>) {
        let mut board = self.board.lock().await;
        let combined_text = board.combined_text().to_string();
        let init = InitMessage {
            group_id: group,
            group_texts: board.snapshot(),
            combined_text,
        };
        (init, self.events.subscribe())
    }

    /// Apply an update from a connection bound to `bound`.
    ///
    /// An `Err` means nothing was written and nothing was broadcast.
    pub async fn apply_update(
        &self,
        bound: Option<&GroupId>,
        update: GroupUpdateMessage,
    ) -> Result<(), BoardError> {
        match bound {
            Some(group) if *group == *update.group_id => {}
            _ => {
                return Err(BoardError::Unauthorized {
                    bound: bound.cloned(),
                    requested: update.group_id,
                })
            }
        }
        if !self.registry.is_valid_group(&update.group_id) {
            return Err(BoardError::invalid_group(update.group_id));
        }
        let text = match update.text {
            Value::String(text) => text,
            _ => return Err(BoardError::MalformedPayload("text must be a string")),
        };

        let mut board = self.board.lock().await;
        let group_id = board.set_fragment(&update.group_id, text.clone())?;
        self.publish(SendMessage::GroupUpdated(GroupUpdatedMessage { group_id, text }));
        let combined = board.combined_text().to_string();
        self.publish(SendMessage::CombinedUpdated(CombinedUpdatedMessage { text: combined }));
        Ok(())
    }

    /// Snapshot for the state endpoint.
    pub async fn query(&self, group: Option<GroupId>) -> StateResponse {
        let mut board = self.board.lock().await;
        let combined_text = board.combined_text().to_string();
        StateResponse {
            group_id: group,
            group_texts: board.snapshot(),
            combined_text,
        }
    }

    /// Count a connection as open until the returned guard is dropped.
    pub fn track_connection(self: &Arc<Self>) -> ConnectionGuard {
        self.connections.fetch_add(1, Ordering::SeqCst);
        ConnectionGuard {
            hub: Arc::clone(self),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub async fn non_empty_fragments(&self) -> usize {
        let board = self.board.lock().await;
        board
            .snapshot()
            .iter()
            .filter(|(_, text)| !trim_fragment(text).is_empty())
            .count()
    }

    fn publish(&self, msg: SendMessage) {
        // An error only means nobody is subscribed right now.
        if let Ok(receivers) = self.events.send(msg) {
            debug!("Broadcast delivered to {} receivers", receivers);
        }
    }
}

/// Releases a tracked connection on drop, however the connection task ends.
pub struct ConnectionGuard {
    hub: Arc<BroadcastHub>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.hub.connections.fetch_sub(1, Ordering::SeqCst);
    }
}
