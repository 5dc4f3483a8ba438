//! Network layer - request building, execution and response formatting
//!
//! The Network actor receives request drafts and sends back rendered results.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{build_request, execute, hit, BodyCheck, OutgoingRequest};
