pub mod handler;
pub mod msg_update_handler;

pub use handler::websocket_handler;
