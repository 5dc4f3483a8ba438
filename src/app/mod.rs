//! App layer - draft editing, result navigation and request dispatch
//!
//! `AppActor` owns the `AppState`; key presses and network responses go in,
//! network commands and render snapshots come out.

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
