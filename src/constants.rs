//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use crate::network::client::BodyCheck;

/// Draft shown when no saved draft exists
pub const DEFAULT_DRAFT_TEXT: &str = "GET www.example.com";

/// File in the user's home directory holding the last draft
pub const DRAFT_FILE_NAME: &str = ".hitman";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "hitman.log";

/// Rule used to decide whether a response body can be shown
pub const BODY_CHECK: BodyCheck = BodyCheck::Utf8;

/// Replaces bodies that would garble the terminal
pub const BINARY_BODY_PLACEHOLDER: &str = "\n\nRESPONSE CONTAINS NON-PRINTABLE CHARACTERS.\n";

/// Skip TLS certificate verification
pub const FLAG_INSECURE: &str = "insecure";

/// Follow redirects
pub const FLAG_LOCATION: &str = "location";

/// Application name
pub const APP_NAME: &str = "Hitman HTTP Client";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
