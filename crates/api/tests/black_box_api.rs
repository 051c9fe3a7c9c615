use account_api::{build_app, ApiConfig};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn root_says_hello() {
    let srv = TestServer::spawn(ApiConfig::default()).await;

    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "hello" }));
}

#[tokio::test]
async fn signup_ignores_request_body() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    for payload in [
        json!({}),
        json!({ "email": "a@b.com", "password": "hunter22" }),
        json!([1, 2, 3]),
    ] {
        let res = client
            .post(format!("{}/signup", srv.base_url))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "message": "It's signup!" }));
    }
}

#[tokio::test]
async fn image_routes_split_by_method() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let posted: serde_json::Value = client
        .post(format!("{}/image", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posted["message"], "It's image!");

    let deleted: serde_json::Value = client
        .delete(format!("{}/image", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deleted["message"], "It's delete image!");

    let res = client
        .get(format!("{}/image", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn configured_prefix_is_honoured() {
    let srv = TestServer::spawn(ApiConfig {
        base_path: "/api/account".to_string(),
        ..ApiConfig::default()
    })
    .await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/account/details", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "It's details!");

    for root in ["/api/account", "/api/account/"] {
        let res = client
            .get(format!("{}{}", srv.base_url, root))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{root}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "message": "hello" }));
    }

    let res = client
        .post(format!("{}/api/account/tokens", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_typed_error() {
    let srv = TestServer::spawn(ApiConfig::default()).await;

    let res = reqwest::get(format!("{}/users/42", srv.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["type"], "NOTFOUND");
    assert_eq!(
        body["message"],
        "resource: route with the value /users/42 not found"
    );
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let srv = TestServer::spawn(ApiConfig {
        max_body_bytes: 8,
        ..ApiConfig::default()
    })
    .await;

    let res = reqwest::Client::new()
        .post(format!("{}/image", srv.base_url))
        .body(vec![7u8; 64])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["type"], "PAYLOADTOOLARGE");
    assert_eq!(body["message"], "payload too large: max size is 8, but got 64");
}
