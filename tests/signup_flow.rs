use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use signup_backend::api::server::{AppState, build_router};
use signup_backend::store::CsvStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_app() -> (SocketAddr, tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("user_data.csv");
    let state = Arc::new(AppState {
        store: CsvStore::new(csv_path.clone()),
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    (addr, dir, csv_path)
}

/// Boot the app with a CSV path that can never be opened (an existing
/// directory), so every append fails.
async fn spawn_broken_app() -> (SocketAddr, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = Arc::new(AppState {
        store: CsvStore::new(dir.path().to_path_buf()),
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    (addr, dir)
}

async fn send_raw(addr: SocketAddr, request: String) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, body.to_string())
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    send_raw(addr, req).await
}

async fn post(addr: SocketAddr, path: &str, content_type: &str, body: &str) -> (u16, String) {
    let req = format!(
        "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    send_raw(addr, req).await
}

fn csv_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("csv file should be readable")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn signup_page_renders_form() {
    let (addr, _dir, _csv) = spawn_app().await;

    let (status, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(body.contains("Sign-Up Page"));
    assert!(body.contains("name=\"username\""));
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (addr, _dir, _csv) = spawn_app().await;

    let (status, body) = get(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn form_submission_appends_one_row() {
    let (addr, _dir, csv_path) = spawn_app().await;

    let (status, body) = post(
        addr,
        "/signup",
        "application/x-www-form-urlencoded",
        "username=alice&email=alice%40example.com&password=hunter2",
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("You have successfully signed up!"));

    let lines = csv_lines(&csv_path);
    assert_eq!(
        lines,
        vec![
            "Username,Email,Password".to_string(),
            "alice,alice@example.com,hunter2".to_string(),
        ]
    );
}

#[tokio::test]
async fn second_submission_appends_without_second_header() {
    let (addr, _dir, csv_path) = spawn_app().await;

    for user in ["alice", "bob"] {
        let (status, _) = post(
            addr,
            "/signup",
            "application/x-www-form-urlencoded",
            &format!("username={user}&email={user}%40example.com&password=pw"),
        )
        .await;
        assert_eq!(status, 200);
    }

    let lines = csv_lines(&csv_path);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Username,Email,Password");
    assert_eq!(lines[1], "alice,alice@example.com,pw");
    assert_eq!(lines[2], "bob,bob@example.com,pw");
}

#[tokio::test]
async fn empty_field_appends_nothing_and_shows_error() {
    let (addr, _dir, csv_path) = spawn_app().await;

    let (status, body) = post(
        addr,
        "/signup",
        "application/x-www-form-urlencoded",
        "username=alice&email=&password=pw",
    )
    .await;

    assert_eq!(status, 422);
    assert!(body.contains("Please fill out all fields."));
    // Rejected submissions keep what the user typed.
    assert!(body.contains("value=\"alice\""));
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn form_submission_reports_store_failure() {
    let (addr, _dir) = spawn_broken_app().await;

    let (status, body) = post(
        addr,
        "/signup",
        "application/x-www-form-urlencoded",
        "username=alice&email=alice%40example.com&password=hunter2",
    )
    .await;

    assert_eq!(status, 500);
    assert!(body.contains("Could not save your sign-up."));
    // The form keeps what the user typed so they can retry.
    assert!(body.contains("value=\"alice\""));
}

#[tokio::test]
async fn json_signup_reports_store_failure() {
    let (addr, _dir) = spawn_broken_app().await;

    let (status, body) = post(
        addr,
        "/api/signup",
        "application/json",
        r#"{"username":"bob","email":"bob@example.com","password":"swordfish"}"#,
    )
    .await;

    assert_eq!(status, 500);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["error"], "could not save sign-up");
}

#[tokio::test]
async fn json_signup_appends_one_row() {
    let (addr, _dir, csv_path) = spawn_app().await;

    let (status, body) = post(
        addr,
        "/api/signup",
        "application/json",
        r#"{"username":"bob","email":"bob@example.com","password":"swordfish"}"#,
    )
    .await;

    assert_eq!(status, 201);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["message"], "You have successfully signed up!");

    let lines = csv_lines(&csv_path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "bob,bob@example.com,swordfish");
}

#[tokio::test]
async fn json_signup_rejects_missing_field() {
    let (addr, _dir, csv_path) = spawn_app().await;

    let (status, body) = post(
        addr,
        "/api/signup",
        "application/json",
        r#"{"username":"bob","email":"bob@example.com"}"#,
    )
    .await;

    assert_eq!(status, 422);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["error"], "Please fill out all fields.");
    assert!(!csv_path.exists());
}
