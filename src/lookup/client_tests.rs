//! Tests for the lookup client

use super::*;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;

const AUTOCOMPLETE_PATH: &str = "/meetup/api/autocomplete/";

fn config(base_url: &str, endpoint: &str) -> LookupConfig {
    LookupConfig {
        base_url: base_url.to_string(),
        endpoint: endpoint.to_string(),
    }
}

#[test]
fn test_default_endpoint() {
    let client = LookupClient::new(&LookupConfig::default()).unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "http://127.0.0.1:8000/meetup/api/autocomplete/"
    );
}

#[test]
fn test_request_url_encodes_query() {
    let client = LookupClient::new(&LookupConfig::default()).unwrap();
    let url = client.request_url("King's Cross & St Pancras");

    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8000/meetup/api/autocomplete/?q=King%27s+Cross+%26+St+Pancras"
    );
}

#[test]
fn test_request_url_round_trips_query() {
    let client = LookupClient::new(&LookupConfig::default()).unwrap();
    let query = "Ærøskøbing/N1 9GU?x=1#frag";
    let url = client.request_url(query);

    let q: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(q, vec![("q".to_string(), query.to_string())]);
    assert_eq!(url.fragment(), None);
}

#[test]
fn test_base_url_with_trailing_slash() {
    let client = LookupClient::new(&config("https://meet.example.org/", "/api/places/")).unwrap();
    assert_eq!(client.endpoint().as_str(), "https://meet.example.org/api/places/");
}

#[test]
fn test_relative_base_url_is_rejected() {
    let err = LookupClient::new(&config("meet.example.org", "/api/")).unwrap_err();
    assert!(matches!(err, LocpickError::InvalidEndpoint { .. }));
}

#[test]
fn test_unsupported_scheme_is_rejected() {
    let err = LookupClient::new(&config("ftp://meet.example.org", "/api/")).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn test_parse_results() {
    let body = r#"{"results": [
        {"label": "Camden Town", "lat": 51.539, "lon": -0.1426},
        {"label": "NW1 8NH", "lat": 51.54, "lon": -0.14}
    ]}"#;
    let results = parse_results(body).unwrap();

    let labels: Vec<&str> = results.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Camden Town", "NW1 8NH"]);
    assert_eq!(results[0].extra.len(), 2);
}

#[test]
fn test_parse_missing_results_is_empty() {
    assert_eq!(parse_results(r#"{"detail": "throttled"}"#).unwrap(), Vec::new());
}

#[test]
fn test_parse_non_json_is_error() {
    let err = parse_results("<html><body>Server Error</body></html>").unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
}

#[test]
fn test_parse_wrong_shape_is_error() {
    assert!(parse_results(r#"{"results": "none"}"#).is_err());
    assert!(parse_results(r#"{"results": [{"lat": 1.0}]}"#).is_err());
}

#[test]
fn test_success_status_passes() {
    assert_eq!(check_status(StatusCode::OK), Ok(()));
    assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(()));
}

#[test]
fn test_error_status_is_lookup_error() {
    assert_eq!(
        check_status(StatusCode::TOO_MANY_REQUESTS),
        Err(LookupError::Status(429))
    );
    assert_eq!(
        check_status(StatusCode::INTERNAL_SERVER_ERROR),
        Err(LookupError::Status(500))
    );
}

/// Serve one canned HTTP response on a local port, reporting the request line
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        // Drain headers up to the blank line
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 2 {
            line.clear();
        }
        reader.get_mut().write_all(response.as_bytes()).unwrap();
        let _ = tx.send(request_line.trim_end().to_string());
    });

    (base_url, rx)
}

#[tokio::test]
async fn test_fetch_sends_encoded_query_and_parses_results() {
    let (base_url, requests) = serve_once(
        "200 OK",
        r#"{"results": [{"label": "Camden Town", "lat": 51.539}]}"#,
    );
    let client = LookupClient::new(&config(&base_url, AUTOCOMPLETE_PATH)).unwrap();

    let results = client.fetch("Camden Town & co").await.unwrap();

    assert_eq!(
        requests.recv().unwrap(),
        "GET /meetup/api/autocomplete/?q=Camden+Town+%26+co HTTP/1.1"
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "Camden Town");
}

#[tokio::test]
async fn test_fetch_html_body_is_parse_error() {
    let (base_url, _requests) = serve_once("200 OK", "<html><body>Sign in</body></html>");
    let client = LookupClient::new(&config(&base_url, AUTOCOMPLETE_PATH)).unwrap();

    let err = client.fetch("Camden").await.unwrap_err();

    assert!(matches!(err, LookupError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_error_status_is_status_error() {
    let (base_url, _requests) = serve_once("503 Service Unavailable", r#"{"results": []}"#);
    let client = LookupClient::new(&config(&base_url, AUTOCOMPLETE_PATH)).unwrap();

    let err = client.fetch("Camden").await.unwrap_err();

    assert_eq!(err, LookupError::Status(503));
}

#[tokio::test]
async fn test_fetch_unreachable_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}", port);
    let client = LookupClient::new(&config(&base_url, AUTOCOMPLETE_PATH)).unwrap();

    let err = client.fetch("Camden").await.unwrap_err();

    assert!(matches!(err, LookupError::Network(_)));
}
