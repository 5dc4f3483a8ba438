//! Full pipeline against a local server: parse, build, send, format.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::server::TlsStream;
use tokio_rustls::TlsAcceptor;

use hitman_tui::constants::BINARY_BODY_PLACEHOLDER;
use hitman_tui::{hit, HitError};

async fn echo_header(headers: HeaderMap) -> StatusCode {
    match headers.get("x-custom-header") {
        Some(value) if value == "Hello, World!" => StatusCode::OK,
        _ => StatusCode::BAD_REQUEST,
    }
}

async fn moved() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/final")])
}

async fn host(headers: HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn whoami(request: Request) -> String {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    format!("{:?} {}", request.version(), host)
}

fn app() -> Router {
    Router::new()
        .route("/echo-header", get(echo_header))
        .route("/moved", get(moved))
        .route("/final", get(|| async { "final" }))
        .route(
            "/text",
            get(|| async { ([("x-b", "2"), ("x-a", "1")], "hello\nworld\n") }),
        )
        .route("/binary", get(|| async { vec![0xffu8, 0xd8, 0xff, 0xe0, 0x00, 0x10] }))
        .route("/host", get(host))
        .route("/whoami", get(whoami))
}

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    addr
}

/// Self-signed TLS in front of the same routes; offers h2 and http/1.1
struct TlsListener {
    tcp: TcpListener,
    acceptor: TlsAcceptor,
}

impl axum::serve::Listener for TlsListener {
    type Io = TlsStream<TcpStream>;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        loop {
            let Ok((stream, addr)) = self.tcp.accept().await else {
                continue;
            };
            // clients that reject the certificate abort the handshake
            if let Ok(tls) = self.acceptor.accept(stream).await {
                return (tls, addr);
            }
        }
    }

    fn local_addr(&self) -> std::io::Result<Self::Addr> {
        self.tcp.local_addr()
    }
}

fn tls_acceptor() -> TlsAcceptor {
    let certs = rustls_pemfile::certs(&mut &include_bytes!("fixtures/cert.pem")[..])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let key = rustls_pemfile::private_key(&mut &include_bytes!("fixtures/key.pem")[..])
        .unwrap()
        .unwrap();

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .unwrap();
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];
    TlsAcceptor::from(Arc::new(config))
}

async fn spawn_tls_server() -> SocketAddr {
    let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = tcp.local_addr().unwrap();
    let listener = TlsListener {
        tcp,
        acceptor: tls_acceptor(),
    };
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn sends_parsed_headers() {
    let addr = spawn_server().await;
    let input = format!(
        "GET \"http://{}/echo-header\" X-Custom-Header: \"Hello, World!\"",
        addr
    );

    let result = hit(&input).await.unwrap();

    assert_eq!(result.response_headers[0], "200 OK");
    assert_eq!(
        result.request_headers,
        vec![
            format!("GET http://{}/echo-header", addr),
            "X-Custom-Header : Hello, World!".to_string(),
        ]
    );
}

#[tokio::test]
async fn redirects_are_not_followed_by_default() {
    let addr = spawn_server().await;

    let result = hit(&format!("GET \"http://{}/moved\"", addr)).await.unwrap();

    assert_eq!(result.response_headers[0], "301 Moved Permanently");
    assert!(result
        .response_headers
        .contains(&"Location : /final".to_string()));
}

#[tokio::test]
async fn location_flag_follows_redirects() {
    let addr = spawn_server().await;

    let result = hit(&format!("GET \"http://{}/moved\" -location", addr))
        .await
        .unwrap();

    assert_eq!(result.response_headers[0], "200 OK");
    assert_eq!(result.response_body, "final");
}

#[tokio::test]
async fn response_headers_are_sorted_and_body_kept() {
    let addr = spawn_server().await;

    let result = hit(&format!("GET \"http://{}/text\" -verbose", addr))
        .await
        .unwrap();

    let headers = &result.response_headers[1..];
    let mut sorted = headers.to_vec();
    sorted.sort();
    assert_eq!(headers, sorted.as_slice());
    assert!(headers.contains(&"X-A : 1".to_string()));
    assert!(headers.contains(&"X-B : 2".to_string()));
    assert_eq!(result.response_body, "hello\nworld\n");
}

#[tokio::test]
async fn binary_body_is_replaced() {
    let addr = spawn_server().await;

    let result = hit(&format!("GET \"http://{}/binary\"", addr)).await.unwrap();

    assert_eq!(result.response_headers[0], "200 OK");
    assert_eq!(result.response_body, BINARY_BODY_PLACEHOLDER);
}

#[tokio::test]
async fn host_header_overrides_url_host() {
    let addr = spawn_server().await;

    let result = hit(&format!("GET \"http://{}/host\" Host: example.test", addr))
        .await
        .unwrap();

    assert_eq!(result.response_body, "example.test");
    assert!(result
        .request_headers
        .contains(&"Host : example.test".to_string()));
}

#[tokio::test]
async fn syntax_errors_stop_before_sending() {
    let err = hit("GET http://127.0.0.1/").await.unwrap_err();
    assert!(matches!(err, HitError::Syntax(_)));
    assert_eq!(err.to_string(), "please enter a valid query");
}

#[tokio::test]
async fn connection_failures_are_transport_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = hit(&format!("GET \"http://{}/\"", addr)).await.unwrap_err();

    assert!(matches!(err, HitError::Transport(_)));
    assert!(err.to_string().starts_with("Connection failed"));
}

#[tokio::test]
async fn insecure_flag_applies_to_its_request_only() {
    let addr = spawn_tls_server().await;
    let strict = format!("GET \"https://{}/final\"", addr);

    let err = hit(&strict).await.unwrap_err();
    assert!(matches!(err, HitError::Transport(_)), "{}", err);

    let result = hit(&format!("GET \"https://{}/final\" -insecure", addr))
        .await
        .unwrap();
    assert_eq!(result.response_headers[0], "200 OK");
    assert_eq!(result.response_body, "final");

    let err = hit(&strict).await.unwrap_err();
    assert!(matches!(err, HitError::Transport(_)), "{}", err);
}

#[tokio::test]
async fn host_header_forces_http1_over_tls() {
    let addr = spawn_tls_server().await;

    let result = hit(&format!("GET \"https://{}/whoami\" -insecure", addr))
        .await
        .unwrap();
    assert!(
        result.response_body.starts_with("HTTP/2.0"),
        "{}",
        result.response_body
    );

    let result = hit(&format!(
        "GET \"https://{}/whoami\" Host: example.test -insecure",
        addr
    ))
    .await
    .unwrap();
    assert_eq!(result.response_body, "HTTP/1.1 example.test");
}

#[tokio::test(start_paused = true)]
async fn slow_responses_are_awaited() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        std::future::pending::<()>().await;
    });

    let input = format!("GET \"http://{}/\"", addr);
    tokio::select! {
        outcome = hit(&input) => panic!("request ended before the server answered: {:?}", outcome),
        _ = tokio::time::sleep(Duration::from_secs(3600)) => {}
    }
}
