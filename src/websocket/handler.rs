use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Extension, State,
    },
    response::Response,
};
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::board::GroupId;
use crate::error::SendError;
use crate::models::{ReceivedMessage, SendMessage};
use crate::websocket::msg_update_handler::handle_update_message;
use crate::ws::sessionctx::SessionId;
use crate::AppState;

/// WebSocket handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Response {
    // The group is fixed for the lifetime of the connection.
    let group = app_state.sessions.current_group(session);
    info!("New WebSocket connection attempt for session {} (group: {:?})", session, group);
    ws.on_upgrade(move |socket| handle_socket(socket, group, app_state))
}

/// Handle WebSocket connection
async fn handle_socket(socket: WebSocket, group: Option<GroupId>, app_state: AppState) {
    // Generate unique connection ID to identify this client in logs
    let connection_id = Uuid::new_v4().to_string();
    let _guard = app_state.hub.track_connection();

    let (mut sender, mut receiver) = socket.split();

    // Send the init message before anything from the broadcast stream
    let (init, mut rbc) = app_state.hub.connect(group.clone()).await;
    if let Err(e) = send_json(&mut sender, &SendMessage::Init(init)).await {
        error!("Failed to send init message on connection {}: {}", connection_id, e);
        return;
    }
    info!("WebSocket connection {} established", connection_id);

    // Forward broadcasts to this client
    let forward_id = connection_id.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            match rbc.recv().await {
                Ok(msg) => {
                    if let Err(e) = send_json(&mut sender, &msg).await {
                        debug!("Connection {} stopped accepting messages: {}", forward_id, e);
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Connection {} lagged behind and skipped {} events", forward_id, skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Handle frames coming from this client
    let hub = app_state.hub.clone();
    let recv_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            let text = match msg {
                Message::Text(text) => text,
                Message::Close(_) => break,
                _ => continue,
            };

            let json_msg: ReceivedMessage = match serde_json::from_str(&text) {
                Ok(json_msg) => json_msg,
                Err(e) => {
                    debug!("Ignoring unparseable message on connection {}: {}", recv_id, e);
                    continue;
                }
            };

            match json_msg {
                ReceivedMessage::GroupUpdate(update_msg) => {
                    handle_update_message(update_msg, group.as_ref(), &recv_id, &hub).await;
                }
            }
        }
    });

    // Wait for either task to finish (and finish the other)
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };
    info!("WebSocket connection {} terminated", connection_id);
}

async fn send_json<S>(sender: &mut S, msg: &SendMessage) -> Result<(), SendError>
where
    S: Sink<Message, Error = axum::Error> + Unpin,
{
    let text = serde_json::to_string(msg)?;
    sender.send(Message::Text(text)).await?;
    Ok(())
}
