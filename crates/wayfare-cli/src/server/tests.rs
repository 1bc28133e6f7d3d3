use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wayfare_core::CatalogBuilder;

use super::router;

async fn test_router() -> (TempDir, Router) {
    let temp_dir = TempDir::new().expect("temp dir");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(temp_dir.path().join("server.db")))
        .build()
        .await
        .expect("catalog");
    (temp_dir, router(catalog))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn package(title: &str, destination: &str, rating: u8) -> Value {
    json!({
        "title": title,
        "destination": destination,
        "price": "₹20,000/-",
        "numericPrice": 20000.0,
        "days": "4 Days",
        "numericDays": 4,
        "hotelRating": rating,
        "type": "Standard",
    })
}

#[tokio::test]
async fn health_is_ok() {
    let (_dir, app) = test_router().await;
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn crud_uses_the_data_envelope() {
    let (_dir, app) = test_router().await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/admin/packages",
        Some(package("Bali Bliss", "bali", 4)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let (status, fetched) = call(&app, Method::GET, &format!("/api/admin/packages/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["title"], "Bali Bliss");

    let mut edited = fetched["data"].clone();
    edited["title"] = json!("Bali Bliss Deluxe");
    let (status, updated) = call(
        &app,
        Method::PUT,
        &format!("/api/admin/packages/{id}"),
        Some(edited),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["title"], "Bali Bliss Deluxe");

    let (status, _) = call(&app, Method::DELETE, &format!("/api/admin/packages/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, missing) = call(&app, Method::GET, &format!("/api/admin/packages/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(missing["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn list_filters_by_query() {
    let (_dir, app) = test_router().await;
    for (title, destination, rating) in [("A", "bali", 3), ("B", "bali", 5), ("C", "dubai", 5)] {
        call(
            &app,
            Method::POST,
            "/api/admin/packages",
            Some(package(title, destination, rating)),
        )
        .await;
    }

    let (_, bali) = call(&app, Method::GET, "/api/admin/packages?destination=bali", None).await;
    assert_eq!(bali["data"].as_array().unwrap().len(), 2);

    let (_, five) = call(
        &app,
        Method::GET,
        "/api/admin/packages?destination=bali&hotelRating=5",
        None,
    )
    .await;
    let five = five["data"].as_array().unwrap();
    assert_eq!(five.len(), 1);
    assert_eq!(five[0]["title"], "B");

    let (status, bad) = call(&app, Method::GET, "/api/admin/packages?hotelRating=high", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(bad["error"].is_string());
}

#[tokio::test]
async fn delete_by_query_checks_destination() {
    let (_dir, app) = test_router().await;
    let (_, created) = call(
        &app,
        Method::POST,
        "/api/admin/itineraries",
        Some(json!({"title": "Dubai Nights", "destination": "dubai", "duration": "3 Days"})),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        Method::DELETE,
        &format!("/api/admin/itineraries?id={id}&destination=bali"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/api/admin/itineraries?id={id}&destination=dubai"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(id));

    let (status, _) = call(&app, Method::DELETE, "/api/admin/itineraries", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn home_content_is_a_singleton() {
    let (_dir, app) = test_router().await;

    let (status, empty) = call(&app, Method::GET, "/api/admin/home-content", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["data"]["destinations"], json!({}));

    let content = json!({"destinations": {"bali": {"featuredPackageIds": ["1"], "topDestinations": []}}});
    let (status, saved) = call(&app, Method::PUT, "/api/admin/home-content", Some(content)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["data"]["id"], "home");

    let (status, _) = call(&app, Method::GET, "/api/admin/home-content/home", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn malformed_requests_get_error_envelopes() {
    let (_dir, app) = test_router().await;

    let (status, body) = call(&app, Method::GET, "/api/admin/tours", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown resource: tours");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/packages")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
