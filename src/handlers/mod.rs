pub mod diagnostics;
pub mod health;
pub mod join;
pub mod state;

pub use diagnostics::*;
pub use health::*;
pub use join::*;
pub use state::*;
