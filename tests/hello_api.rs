use std::net::SocketAddr;

use afternoon_lessons::api::{serve, Message};
use tokio::net::TcpListener;

async fn start(greeting: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, greeting.to_string()));
    addr
}

#[tokio::test]
async fn hello_returns_json_message() {
    let addr = start("Hello, world").await;

    let resp = reqwest::get(format!("http://{}/hello", addr)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let message: Message = resp.json().await.unwrap();
    assert_eq!(message.text, "Hello, world");
}

#[tokio::test]
async fn hello_accepts_post() {
    let addr = start("hello").await;

    let resp = reqwest::Client::new()
        .post(format!("http://{}/hello", addr))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "{\"text\":\"hello\"}\n");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = start("hello").await;

    let resp = reqwest::get(format!("http://{}/missing", addr)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "404 page not found\n");
}

#[tokio::test]
async fn serves_several_requests_on_one_listener() {
    let addr = start("again").await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let message: Message = client
            .get(format!("http://{}/hello", addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(message.text, "again");
    }
}

#[tokio::test]
async fn keeps_serving_after_many_dropped_connections() {
    let addr = start("still here").await;

    let mut streams = Vec::new();
    for _ in 0..200 {
        if let Ok(stream) = tokio::net::TcpStream::connect(addr).await {
            streams.push(stream);
        }
    }
    drop(streams);

    let message: Message = reqwest::get(format!("http://{}/hello", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(message.text, "still here");
}
