use moka::sync::Cache;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::board::{GroupId, GroupRegistry};
use crate::error::BoardError;

/// Opaque per-client identity carried in the session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(SessionId)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionCtx {
    pub group: Option<GroupId>,
}

/// Session store shared by the HTTP routes and the realtime endpoint.
#[derive(Clone)]
pub struct SessionBinder {
    sessions: Cache<SessionId, SessionCtx>,
    registry: Arc<GroupRegistry>,
    cookie_name: Arc<str>,
}

impl SessionBinder {
    pub fn new(registry: Arc<GroupRegistry>, cookie_name: &str, ttl: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(100_000)
            .time_to_idle(ttl)
            .build();
        info!("Session cache initialized");
        Self {
            sessions,
            registry,
            cookie_name: Arc::from(cookie_name),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resume the presented session if it is known, otherwise start a new one.
    /// The flag is true when a new session was created.
    pub fn open(&self, presented: Option<SessionId>) -> (SessionId, bool) {
        if let Some(id) = presented {
            if self.sessions.contains_key(&id) {
                return (id, false);
            }
        }
        let id = SessionId(Uuid::new_v4());
        self.sessions.insert(id, SessionCtx::default());
        (id, true)
    }

    /// Bind the session to a group, replacing any earlier choice.
    pub fn select_group(&self, id: SessionId, group: &str) -> Result<GroupId, BoardError> {
        let group = self
            .registry
            .resolve(group)
            .cloned()
            .ok_or_else(|| BoardError::invalid_group(group))?;
        self.sessions.insert(
            id,
            SessionCtx {
                group: Some(group.clone()),
            },
        );
        Ok(group)
    }

    pub fn current_group(&self, id: SessionId) -> Option<GroupId> {
        self.sessions.get(&id).and_then(|ctx| ctx.group)
    }

    pub fn session_count(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }
}
