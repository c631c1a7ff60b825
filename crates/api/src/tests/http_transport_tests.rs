// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    routing::{delete, get},
};
use helpdesk_domain::{Department, EntityId};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use crate::{
    ApiClient, ApiError, ApiRequest, ApiResponse, ApiTransport, Departments, HttpMethod,
    HttpTransport,
};

async fn echo(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Json<Value> {
    let content_type: Option<&str> = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    Json(json!({
        "content_type": content_type,
        "query": query,
        "body": body,
    }))
}

async fn spawn_server() -> SocketAddr {
    let app: Router = Router::new()
        .route(
            "/api/departments/",
            get(|| async { Json(json!([{ "id": 1, "name": "IT", "director": "Ana" }])) }),
        )
        .route(
            "/api/departments/{id}/",
            delete(|Path(id): Path<String>| async move {
                if id == "1" {
                    StatusCode::NO_CONTENT
                } else {
                    StatusCode::NOT_FOUND
                }
            }),
        )
        .route("/api/echo/", get(echo).post(echo))
        .route(
            "/api/items/{id}/",
            get(|Path(id): Path<String>| async move { Json(json!({ "id": id })) }),
        );

    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn transport_for(addr: SocketAddr) -> HttpTransport {
    let base: Url = Url::parse(&format!("http://{addr}")).unwrap();
    HttpTransport::new(base, Duration::from_secs(5)).unwrap()
}

fn body_json(response: &ApiResponse) -> Value {
    serde_json::from_slice(&response.body).unwrap()
}

#[tokio::test]
async fn test_list_through_http_transport() {
    let addr: SocketAddr = spawn_server().await;
    let client: ApiClient<HttpTransport> = ApiClient::new(transport_for(addr));

    let departments: Vec<Department> = client.list::<Departments>(&[]).await.unwrap();

    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].id, EntityId::new("1"));
    assert_eq!(departments[0].name, "IT");
}

#[tokio::test]
async fn test_sends_json_content_type_and_query() {
    let addr: SocketAddr = spawn_server().await;
    let transport: HttpTransport = transport_for(addr);
    let request: ApiRequest = ApiRequest::new(HttpMethod::Get, &["api", "echo"])
        .with_query(&[("start_date", String::from("2024-05-01"))]);

    let response: ApiResponse = transport.send(request).await.unwrap();

    assert_eq!(response.status, 200);
    let echoed: Value = body_json(&response);
    assert_eq!(echoed["content_type"], json!("application/json"));
    assert_eq!(echoed["query"]["start_date"], json!("2024-05-01"));
}

#[tokio::test]
async fn test_sends_json_body() {
    let addr: SocketAddr = spawn_server().await;
    let transport: HttpTransport = transport_for(addr);
    let request: ApiRequest = ApiRequest::new(HttpMethod::Post, &["api", "echo"])
        .with_body(json!({ "name": "Finance", "director": null }));

    let response: ApiResponse = transport.send(request).await.unwrap();

    let echoed: Value = body_json(&response);
    assert_eq!(echoed["content_type"], json!("application/json"));
    let sent: Value = serde_json::from_str(echoed["body"].as_str().unwrap()).unwrap();
    assert_eq!(sent, json!({ "name": "Finance", "director": null }));
}

#[tokio::test]
async fn test_identifiers_are_escaped_into_one_segment() {
    let addr: SocketAddr = spawn_server().await;
    let transport: HttpTransport = transport_for(addr);
    let request: ApiRequest = ApiRequest::new(HttpMethod::Get, &["api", "items", "a b/c"]);

    let response: ApiResponse = transport.send(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response), json!({ "id": "a b/c" }));
}

#[tokio::test]
async fn test_status_codes_pass_through_to_client() {
    let addr: SocketAddr = spawn_server().await;
    let client: ApiClient<HttpTransport> = ApiClient::new(transport_for(addr));

    client
        .delete::<Departments>(&EntityId::new("1"))
        .await
        .unwrap();
    let err: ApiError = client
        .delete::<Departments>(&EntityId::new("2"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation { status: 404, .. }));
}

#[tokio::test]
async fn test_closed_port_is_network_error() {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    let client: ApiClient<HttpTransport> = ApiClient::new(transport_for(addr));

    let err: ApiError = client.list::<Departments>(&[]).await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
}

#[test]
fn test_rejects_base_url_without_path() {
    let base: Url = Url::parse("mailto:helpdesk@example.com").unwrap();

    let result = HttpTransport::new(base, Duration::from_secs(1));

    assert!(result.is_err());
}
