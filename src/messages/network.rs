//! Network messages - communication between App and Network layers

use crate::models::HitResult;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Parse and execute a request draft
    Hit { id: u64, text: String },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The request ran and produced a rendered result
    Completed {
        id: u64,
        result: HitResult,
        time_ms: u64,
    },
    /// Parsing, building or sending failed
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
