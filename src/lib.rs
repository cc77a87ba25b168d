pub mod board;
pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod websocket;
pub mod ws;

use std::sync::Arc;
use tracing::info;

use board::GroupRegistry;
use config::Config;
use error::ConfigError;
use ws::{hub::BroadcastHub, sessionctx::SessionBinder};

/// Handles shared by every route and every realtime connection
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<GroupRegistry>,
    pub hub: Arc<BroadcastHub>,
    pub sessions: SessionBinder,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let registry = Arc::new(GroupRegistry::new(config.group_ids.iter().cloned())?);
        info!(
            "Groups: {}",
            registry
                .all_groups()
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let hub = Arc::new(BroadcastHub::new(registry.clone(), config.broadcast_capacity));
        let sessions = SessionBinder::new(
            registry.clone(),
            &config.session_cookie_name,
            config.session_ttl(),
        );
        Ok(Self {
            config: Arc::new(config),
            registry,
            hub,
            sessions,
        })
    }
}
