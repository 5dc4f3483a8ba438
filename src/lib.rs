//! # Hitman
//!
//! A terminal HTTP client. Requests are written in a small language:
//!
//! ```text
//! GET "https://example.com/search?q=rust"
//! Accept: text/html   # comments run to the end of the line
//! Cache-Control: no-cache
//! -location -insecure
//! ```
//!
//! ## Pipeline
//! - `parser` - lexer and grammar producing a [`ParsedRequest`]
//! - `network::client` - request building, execution and formatting into a [`HitResult`]
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (draft editing, result navigation)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod clipboard;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod parser;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use error::{ClipboardError, HitError, PersistenceError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{HitResult, ParsedRequest};
pub use network::{build_request, execute, hit, BodyCheck, NetworkActor};
pub use parser::{parse, ParseError};
pub use storage::Storage;
