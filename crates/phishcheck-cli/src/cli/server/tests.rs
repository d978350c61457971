//! Tests for request parsing, routing, rendering and a socket round trip.

use std::sync::Arc;

use phishcheck_core::service::PhishChecker;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::page::{render, PageView};
use super::request::{read_request, Request, RequestError, MAX_BODY_BYTES};
use super::response::Response;
use super::routes::route;

async fn parse(raw: &[u8]) -> Result<Request, RequestError> {
    let mut reader = raw;
    read_request(&mut reader).await
}

fn post_form(body: &str) -> Request {
    Request {
        method: "POST".to_string(),
        path: "/".to_string(),
        headers: vec![(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )],
        body: body.as_bytes().to_vec(),
    }
}

fn get(path: &str) -> Request {
    Request {
        method: "GET".to_string(),
        path: path.to_string(),
        headers: Vec::new(),
        body: Vec::new(),
    }
}

fn body_str(resp: &Response) -> String {
    String::from_utf8(resp.body.clone()).unwrap()
}

#[tokio::test]
async fn parses_get_drops_query_and_reads_headers() {
    let req = parse(b"GET /history?x=1 HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\n\r\n")
        .await
        .unwrap();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/history");
    assert_eq!(req.header("host"), Some("localhost"));
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn parses_post_body_and_decodes_form() {
    let body = "url=http%3A%2F%2Fa%40b.com%2Flogin&other=1";
    let raw = format!(
        "POST / HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let req = parse(raw.as_bytes()).await.unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.form_field("url").as_deref(), Some("http://a@b.com/login"));
    assert_eq!(req.form_field("other").as_deref(), Some("1"));
    assert_eq!(req.form_field("missing"), None);
}

#[test]
fn form_plus_decodes_to_space() {
    let req = post_form("url=+example.com+");
    assert_eq!(req.form_field("url").as_deref(), Some(" example.com "));
}

#[tokio::test]
async fn rejects_malformed_request_line() {
    let err = parse(b"NONSENSE\r\n\r\n").await.unwrap_err();
    assert!(matches!(err, RequestError::BadRequestLine(_)));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn rejects_header_without_colon() {
    let err = parse(b"GET / HTTP/1.1\r\nbroken header\r\n\r\n")
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::BadHeader(_)));
}

#[tokio::test]
async fn empty_stream_is_closed_not_client_error() {
    let err = parse(b"").await.unwrap_err();
    assert!(matches!(err, RequestError::Closed));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn rejects_oversized_head() {
    let raw = format!("GET / HTTP/1.1\r\nX-Big: {}\r\n\r\n", "a".repeat(9000));
    let err = parse(raw.as_bytes()).await.unwrap_err();
    assert!(matches!(err, RequestError::HeadTooLarge));
}

#[tokio::test]
async fn rejects_oversized_body() {
    let raw = format!(
        "POST / HTTP/1.1\r\nContent-Length: {}\r\n\r\n",
        MAX_BODY_BYTES + 1
    );
    let err = parse(raw.as_bytes()).await.unwrap_err();
    assert!(matches!(err, RequestError::BodyTooLarge(_)));
}

#[tokio::test]
async fn short_body_is_a_client_error() {
    let err = parse(b"POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nurl=a")
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::IncompleteBody(10)));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn rejects_bad_content_length() {
    let err = parse(b"POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\n")
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::BadContentLength(_)));
}

#[test]
fn get_root_renders_empty_page() {
    let checker = PhishChecker::new(10);
    let resp = route(&get("/"), &checker);
    assert_eq!(resp.status, 200);
    assert!(resp.content_type.starts_with("text/html"));
    let html = body_str(&resp);
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("No checks yet."));
}

#[test]
fn post_root_scores_and_records() {
    let checker = PhishChecker::new(10);
    let resp = route(
        &post_form("url=http%3A%2F%2Fsecure-login-update.xyz%2Fverify%3Fuser%3Da%40b"),
        &checker,
    );
    assert_eq!(resp.status, 200);
    let html = body_str(&resp);
    assert!(html.contains("Suspicious URL: http://secure-login-update.xyz/verify?user=a@b"));
    assert!(html.contains("risk-high"));
    assert!(html.contains("Suspicious domain extension"));

    let history = checker.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 7);
}

#[test]
fn post_without_url_field_is_empty_input() {
    let checker = PhishChecker::new(10);
    let resp = route(&post_form(""), &checker);
    assert_eq!(resp.status, 200);
    assert!(body_str(&resp).contains("Empty input"));
}

#[test]
fn post_escapes_user_input() {
    let checker = PhishChecker::new(10);
    let resp = route(&post_form("url=%3Cscript%3Ealert(1)%3C%2Fscript%3E"), &checker);
    let html = body_str(&resp);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn history_endpoint_returns_json_newest_first() {
    let checker = PhishChecker::new(10);
    route(&post_form("url=first.example"), &checker);
    route(&post_form("url=second.example"), &checker);

    let resp = route(&get("/history"), &checker);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "application/json");
    let json: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
    let history = json["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["url"], "http://second.example");
    assert_eq!(history[1]["url"], "http://first.example");
    assert_eq!(history[0]["label"], "Safe");
    assert_eq!(history[0]["riskLevel"], "Low");
}

#[test]
fn unknown_path_and_wrong_method() {
    let checker = PhishChecker::new(10);
    assert_eq!(route(&get("/nope"), &checker).status, 404);

    let mut delete = get("/");
    delete.method = "DELETE".to_string();
    let resp = route(&delete, &checker);
    assert_eq!(resp.status, 405);
    assert_eq!(resp.headers, vec![("Allow", "GET, POST".to_string())]);

    let mut post_history = get("/history");
    post_history.method = "POST".to_string();
    assert_eq!(route(&post_history, &checker).status, 405);
}

#[test]
fn response_bytes_have_status_line_and_length() {
    let bytes = Response::json("{}".to_string()).to_bytes();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Length: 2\r\n"));
    assert!(text.contains("Connection: close\r\n"));
    assert!(text.ends_with("\r\n\r\n{}"));
}

#[test]
fn render_escapes_text_and_attribute_values() {
    let html = render(&PageView {
        url: r#""><b>x</b>&"#,
        verdict: None,
        history: &[],
    })
    .into_string();
    assert!(html.contains(r#"value="&quot;&gt;&lt;b&gt;x&lt;/b&gt;&amp;""#));
    assert!(!html.contains("<b>x</b>"));
}

async fn roundtrip(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

/// Sends `raw`, then closes the write half before reading the reply.
async fn send_and_half_close(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    stream.shutdown().await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn serves_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let checker = Arc::new(PhishChecker::new(10));
    let server = tokio::spawn(super::serve(listener, Arc::clone(&checker)));

    let body = "url=http%3A%2F%2F10.0.0.1%2F";
    let resp = roundtrip(
        addr,
        &format!(
            "POST / HTTP/1.1\r\nHost: test\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ),
    )
    .await;
    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(resp.contains("Suspicious URL: http://10.0.0.1/"));

    let resp = roundtrip(addr, "GET /history HTTP/1.1\r\nHost: test\r\n\r\n").await;
    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(resp.contains("\"riskLevel\":\"Medium\""));

    let resp = roundtrip(addr, "garbage\r\n").await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));

    let resp = send_and_half_close(
        addr,
        "POST / HTTP/1.1\r\nHost: test\r\nContent-Length: 40\r\n\r\nurl=http",
    )
    .await;
    assert!(resp.starts_with("HTTP/1.1 400 Bad Request\r\n"));

    assert_eq!(checker.history().len(), 1);
    server.abort();
}
