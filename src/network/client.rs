//! HTTP client wrapper - builds requests from parsed text and formats responses

use std::borrow::Cow;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode, Url};

use crate::constants::{BINARY_BODY_PLACEHOLDER, BODY_CHECK};
use crate::error::HitError;
use crate::models::{HitResult, ParsedRequest};
use crate::parser;

/// How a response body is judged unfit for the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyCheck {
    /// Any 0 byte marks the body as binary
    NulByte,
    /// Anything that is not well-formed UTF-8 marks the body as binary
    Utf8,
}

impl BodyCheck {
    pub fn is_binary(&self, body: &[u8]) -> bool {
        match self {
            BodyCheck::NulByte => body.contains(&0),
            BodyCheck::Utf8 => std::str::from_utf8(body).is_err(),
        }
    }
}

/// A request ready to send, paired with the client configured for it
#[derive(Debug)]
pub struct OutgoingRequest {
    client: reqwest::Client,
    request: reqwest::Request,
}

impl OutgoingRequest {
    pub fn request(&self) -> &reqwest::Request {
        &self.request
    }
}

/// Prefix `https://` unless the url already names http or https
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{}", url))
    }
}

/// Create a client for a single request; flags decide redirects and TLS checks
fn create_client(parsed: &ParsedRequest) -> Result<reqwest::Client, HitError> {
    let redirect = if parsed.follow_redirects() {
        Policy::default()
    } else {
        Policy::none()
    };

    let mut builder = reqwest::Client::builder()
        .redirect(redirect)
        .danger_accept_invalid_certs(parsed.insecure());

    // h2 sends `:authority` from the url, so a Host override needs HTTP/1.1
    if let Some(host) = parsed.host_override() {
        tracing::debug!(host, "Host header set, pinning HTTP/1.1");
        builder = builder.http1_only();
    }

    builder.build().map_err(HitError::Client)
}

/// Turn a parsed request into something the client can send
pub fn build_request(parsed: &ParsedRequest) -> Result<OutgoingRequest, HitError> {
    let method = Method::from_bytes(parsed.method().as_bytes())
        .map_err(|_| HitError::InvalidMethod(parsed.method().to_string()))?;

    let url_text = normalize_url(parsed.url());
    let url = Url::parse(&url_text).map_err(|e| HitError::InvalidUrl {
        url: url_text.to_string(),
        reason: e.to_string(),
    })?;

    let mut headers = HeaderMap::with_capacity(parsed.headers().len());
    for (name, value) in parsed.headers() {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| HitError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| HitError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.append(header_name, header_value);
    }

    let mut request = reqwest::Request::new(method, url);
    *request.headers_mut() = headers;

    Ok(OutgoingRequest {
        client: create_client(parsed)?,
        request,
    })
}

/// Send the request once and render what came back
pub async fn execute(outgoing: OutgoingRequest) -> Result<HitResult, HitError> {
    let OutgoingRequest { client, request } = outgoing;
    let request_headers = format_request(&request);

    let response = client.execute(request).await.map_err(HitError::Transport)?;
    let response_headers = format_response_headers(response.status(), response.headers());
    let body = response.bytes().await.map_err(HitError::Body)?;

    Ok(HitResult {
        request_headers,
        response_headers,
        response_body: format_response_body(&body, BODY_CHECK),
    })
}

/// Parse, build and execute request text
pub async fn hit(text: &str) -> Result<HitResult, HitError> {
    let parsed = parser::parse(text).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request text");
        e
    })?;
    let outgoing = build_request(&parsed)?;

    tracing::info!(
        method = %outgoing.request().method(),
        url = %outgoing.request().url(),
        flags = ?parsed.flags(),
        "Executing request"
    );
    let result = execute(outgoing).await?;
    tracing::info!(status = ?result.response_headers.first(), "Request completed");
    Ok(result)
}

/// `METHOD URL` followed by one line per header, in send order
pub fn format_request(request: &reqwest::Request) -> Vec<String> {
    let mut lines = Vec::with_capacity(request.headers().len() + 1);
    lines.push(format!("{} {}", request.method(), request.url()));
    lines.extend(
        request
            .headers()
            .iter()
            .map(|(name, value)| header_line(name, value)),
    );
    lines
}

/// Status line followed by header lines sorted by their rendered text
pub fn format_response_headers(status: StatusCode, headers: &HeaderMap) -> Vec<String> {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| header_line(name, value))
        .collect();
    lines.sort();
    lines.insert(0, status_line(status));
    lines
}

/// Body text, or a placeholder when `check` finds it unprintable
pub fn format_response_body(body: &[u8], check: BodyCheck) -> String {
    if check.is_binary(body) {
        BINARY_BODY_PLACEHOLDER.to_string()
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

/// `200 OK`; codes without a registered reason render alone
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    }
}

fn header_line(name: &HeaderName, value: &HeaderValue) -> String {
    format!(
        "{} : {}",
        canonical_header_name(name.as_str()),
        String::from_utf8_lossy(value.as_bytes())
    )
}

/// `content-type` -> `Content-Type`
pub fn canonical_header_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper = c == '-';
    }
    out
}
