use thiserror::Error;

use crate::board::GroupId;

/// Reasons a join or an update is refused.
///
/// Only `InvalidGroup` ever reaches a client (as the 400 on `/join`); on the
/// realtime path every variant is dropped after logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid group")]
    InvalidGroup { group_id: String },

    #[error("connection bound to {bound:?} may not update '{requested}'")]
    Unauthorized {
        bound: Option<GroupId>,
        requested: String,
    },

    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),
}

impl BoardError {
    pub fn invalid_group(group_id: impl Into<String>) -> Self {
        BoardError::InvalidGroup {
            group_id: group_id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Invalid group list: {0}")]
    InvalidGroups(String),
}

/// Failure to deliver a message on a realtime connection.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to send message: {0}")]
    Socket(#[from] axum::Error),
}
