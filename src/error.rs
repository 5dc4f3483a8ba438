//! Error types for the request pipeline and its collaborators

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Anything that stops a request from producing a result
#[derive(Debug, Error)]
pub enum HitError {
    #[error("please enter a valid query")]
    Syntax(#[from] ParseError),

    #[error("invalid method: {0}")]
    InvalidMethod(String),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("could not configure HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{}", describe_transport(.0))]
    Transport(#[source] reqwest::Error),

    #[error("error reading body: {}", with_causes(.0))]
    Body(#[source] reqwest::Error),
}

/// Clipboard could not be reached or written
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

/// Draft file could not be written
#[derive(Debug, Error)]
#[error("could not save draft to {}: {source}", .path.display())]
pub struct PersistenceError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

fn describe_transport(err: &reqwest::Error) -> String {
    let detail = with_causes(err);
    if err.is_timeout() {
        format!("Request timed out: {}", detail)
    } else if err.is_connect() {
        format!("Connection failed: {}", detail)
    } else {
        format!("Request failed: {}", detail)
    }
}

/// reqwest keeps the useful part (DNS, TLS, refused) in the source chain
fn with_causes(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
