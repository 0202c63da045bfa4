//! The list state machine and the state it publishes.
//!
//! `Loading → Ready | Failed`, with toggles replacing `Ready` by a new
//! `Ready` and refreshes re-running the load.

mod machine;
mod state;

pub use machine::ListStore;
pub use state::ViewState;
