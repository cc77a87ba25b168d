use tracing::{debug, info};

use crate::board::GroupId;
use crate::models::GroupUpdateMessage;
use crate::ws::hub::BroadcastHub;

/// Handle a `group:update` message.
///
/// Refused updates are only logged; the sender is never told.
pub async fn handle_update_message(
    update_msg: GroupUpdateMessage,
    bound: Option<&GroupId>,
    connection_id: &str,
    hub: &BroadcastHub,
) {
    let group_id = update_msg.group_id.clone();
    match hub.apply_update(bound, update_msg).await {
        Ok(()) => info!("Group {} updated from connection {}", group_id, connection_id),
        Err(e) => debug!("Dropped update for {} from connection {}: {}", group_id, connection_id, e),
    }
}
