//! State management for the file explorer.

mod expansion;
mod explorer_state;

pub use expansion::ExpansionState;
pub use explorer_state::{ExplorerOptions, ExplorerState};
