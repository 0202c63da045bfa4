//! HTTP source tests against a local one-shot server.

use fetchlist::error::{DecodeErrorKind, TransportErrorKind};
use fetchlist::{
    FetchListError, HttpRecordSource, HttpSourceConfig, ListStore, RecordSource, ViewState,
};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;

// ============================================================================
// Stub server
// ============================================================================

/// Serve exactly one response, returning the URL and the captured request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub address");

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read request") == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
        head
    });

    (format!("http://{addr}/hiring.json"), handle)
}

fn source_for(url: String) -> HttpRecordSource {
    HttpRecordSource::new(HttpSourceConfig {
        url,
        timeout: Duration::from_secs(5),
        ..HttpSourceConfig::default()
    })
    .expect("client builds")
}

const BODY: &str = r#"[
  {"id": 755, "listId": 2, "name": ""},
  {"id": 203, "listId": 2, "name": ""},
  {"id": 684, "listId": 1, "name": "Item 684"},
  {"id": 276, "listId": 1, "name": "Item 276"},
  {"id": 736, "listId": 3, "name": null},
  {"id": 926, "listId": 4, "name": null},
  {"id": 808, "listId": 4, "name": "Item 808"},
  {"id": 28, "listId": 1, "name": "Item 28"}
]"#;

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_fetch_decodes_records_and_sends_headers() {
    let (url, server) = serve_once("200 OK", BODY);
    let records = source_for(url).fetch_raw_records().expect("fetch succeeds");
    assert_eq!(records.len(), 8);
    assert_eq!(records[2].group_id, 1);
    assert_eq!(records[2].name.as_deref(), Some("Item 684"));
    assert!(records[4].name.is_none());

    let head = server.join().expect("server thread").to_lowercase();
    assert!(head.starts_with("get /hiring.json"), "unexpected: {head}");
    assert!(head.contains("accept: application/json"), "unexpected: {head}");
    assert!(head.contains("user-agent: fetchlist/"), "unexpected: {head}");
}

#[test]
fn test_store_over_http_filters_and_sorts() {
    let (url, server) = serve_once("200 OK", BODY);
    let store = ListStore::new(source_for(url));
    let state = store.wait_settled(Duration::from_secs(10));

    let rows: Vec<(i64, &str)> = state
        .items()
        .iter()
        .map(|r| (r.group_id, r.name.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "Item 28"),
            (1, "Item 276"),
            (1, "Item 684"),
            (4, "Item 808"),
        ]
    );
    server.join().expect("server thread");
}

#[test]
fn test_server_error_is_transport_status() {
    let (url, server) = serve_once("500 Internal Server Error", "oops");
    let err = source_for(url).fetch_raw_records().unwrap_err();
    match err {
        FetchListError::Transport {
            source: TransportErrorKind::Status { status },
            context,
        } => {
            assert_eq!(status, 500);
            assert!(context.starts_with("fetching http://"), "unexpected: {context}");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    server.join().expect("server thread");
}

#[test]
fn test_store_keeps_status_of_failed_load() {
    let (url, server) = serve_once("500 Internal Server Error", "oops");
    let store = ListStore::new(source_for(url));
    assert_eq!(store.wait_settled(Duration::from_secs(10)), ViewState::Failed);

    let error = store.last_error().expect("failure cause");
    assert!(error.contains("Server returned HTTP 500"), "unexpected: {error}");
    assert!(error.contains("fetching http://"), "unexpected: {error}");
    server.join().expect("server thread");
}

#[test]
fn test_malformed_body_is_decode_error() {
    let (url, server) = serve_once("200 OK", r#"[{"id": 1, "listId": "#);
    let err = source_for(url).fetch_raw_records().unwrap_err();
    assert!(
        matches!(
            err,
            FetchListError::Decode {
                source: DecodeErrorKind::InvalidJson(_),
                ..
            }
        ),
        "unexpected: {err:?}"
    );
    server.join().expect("server thread");
}

#[test]
fn test_wrong_schema_is_decode_error() {
    let (url, server) = serve_once("200 OK", r#"{"records": []}"#);
    let err = source_for(url).fetch_raw_records().unwrap_err();
    assert!(err.is_decode(), "unexpected: {err:?}");
    server.join().expect("server thread");
}

#[test]
fn test_connection_refused_fails_the_store() {
    // Bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("free port")
        .port();
    let source = source_for(format!("http://127.0.0.1:{port}/hiring.json"));

    let err = source.fetch_raw_records().unwrap_err();
    assert!(err.is_transport(), "unexpected: {err:?}");

    let store = ListStore::new(source);
    assert_eq!(store.wait_settled(Duration::from_secs(10)), ViewState::Failed);
}
