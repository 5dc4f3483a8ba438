//! Channel payloads exchanged by the terminal loop, the app actor and the network actor.

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::UiEvent;
