use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::constants::{FLAG_INSECURE, FLAG_LOCATION};

/// A request as written in the request language
///
/// Built only by the parser; `method` and `url` are never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRequest {
    method: String,
    url: String,
    headers: IndexMap<String, String>,
    flags: BTreeSet<String>,
}

impl ParsedRequest {
    pub(crate) fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        headers: IndexMap<String, String>,
        flags: BTreeSet<String>,
    ) -> Self {
        ParsedRequest {
            method: method.into(),
            url: url.into(),
            headers,
            flags,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Header name to value; a repeated name keeps its last value
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Value of a `Host` header, matched case-insensitively
    pub fn host_override(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("host"))
            .map(|(_, value)| value.as_str())
    }

    /// `-insecure`: skip certificate verification
    pub fn insecure(&self) -> bool {
        self.has_flag(FLAG_INSECURE)
    }

    /// `-location`: follow redirects
    pub fn follow_redirects(&self) -> bool {
        self.has_flag(FLAG_LOCATION)
    }
}

/// Rendered outcome of one request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitResult {
    /// `METHOD URL` followed by the headers sent, in send order
    pub request_headers: Vec<String>,
    /// Status line followed by `Name : Value` lines, sorted
    pub response_headers: Vec<String>,
    pub response_body: String,
}

impl HitResult {
    /// Flatten into the viewport layout: request lines, a blank separator,
    /// response header lines, another separator, then the body
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines =
            Vec::with_capacity(self.request_headers.len() + self.response_headers.len() + 3);
        lines.extend(self.request_headers.iter().cloned());
        lines.push(String::new());
        lines.extend(self.response_headers.iter().cloned());
        lines.push(String::new());
        lines.push(self.response_body.clone());
        lines
    }
}
