mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, spawn_seeded_app, TestApp};

async fn create_product(app: &TestApp, payload: Value) -> reqwest::Response {
    app.client
        .post(app.url("/api/products"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request")
}

async fn get_json(app: &TestApp, path: &str) -> (StatusCode, Value) {
    let response = app
        .client
        .get(app.url(path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    (status, body)
}

#[tokio::test]
async fn test_create_product() {
    let app = spawn_app().await;

    let response = create_product(
        &app,
        json!({
            "name": "Premium Tractor Model XL-500",
            "price": "₹12,50,000",
            "slug": "premium-tractor-xl-500",
            "features": ["GPS navigation", "Air conditioning"],
            "isFeatured": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["features"], json!(["GPS navigation", "Air conditioning"]));
    assert_eq!(body["isActive"], true);
    assert!(body["categoryId"].is_null());

    let (status, fetched) = get_json(&app, "/api/products/premium-tractor-xl-500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    let (status, missing) = get_json(&app, "/api/products/no-such-product").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"], "Product not found");
}

#[tokio::test]
async fn test_duplicate_product_slug() {
    let app = spawn_app().await;
    let payload = json!({ "name": "Plow", "slug": "plow-ps-200" });

    assert_eq!(
        create_product(&app, payload.clone()).await.status(),
        StatusCode::CREATED
    );
    let response = create_product(&app, payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert!(body["error"].as_str().unwrap().contains("plow-ps-200"));
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected() {
    let app = spawn_app().await;

    let response = create_product(&app, json!({ "name": "Plow", "slug": "plow", "price": 10 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_patch_product_keeps_omitted_fields() {
    let app = spawn_app().await;
    let created = create_product(&app, json!({ "name": "A", "price": "10", "slug": "a" }))
        .await
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .client
        .put(app.url(&format!("/api/products/{id}")))
        .json(&json!({ "price": "20" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["name"], "A");
    assert_eq!(body["price"], "20");
    assert_eq!(body["slug"], "a");

    let response = app
        .client
        .put(app.url("/api/products/4040"))
        .json(&json!({ "price": "20" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_filters() {
    let app = spawn_seeded_app().await;

    let (status, all) = get_json(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 6);

    let (status, tractors) = get_json(&app, "/api/products?category=tractors").await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = tractors
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["premium-tractor-xl-500", "farm-tool-kit-ftk-pro"]);

    let (status, _) = get_json(&app, "/api/products?category=spaceships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, featured) = get_json(&app, "/api/products?featured=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(featured
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["isFeatured"] == true && p["isActive"] == true));
}

#[tokio::test]
async fn test_related_products() {
    let app = spawn_app().await;
    let category = app
        .client
        .post(app.url("/api/categories"))
        .json(&json!({ "name": "Tractors", "slug": "tractors" }))
        .send()
        .await
        .expect("Failed to send request")
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    let category_id = category["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for n in 0..6 {
        let product = create_product(
            &app,
            json!({ "name": format!("Tractor {n}"), "slug": format!("tractor-{n}"), "categoryId": category_id }),
        )
        .await
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
        ids.push(product["id"].as_i64().unwrap());
    }

    let source = ids[0];
    let (status, related) = get_json(&app, &format!("/api/products/{source}/related")).await;
    assert_eq!(status, StatusCode::OK);
    let related = related.as_array().unwrap();
    assert_eq!(related.len(), 4);
    assert!(related.iter().all(|p| p["id"].as_i64() != Some(source)));

    let (status, _) = get_json(&app, "/api/products/999/related").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let app = spawn_app().await;
    let created = create_product(&app, json!({ "name": "Kit", "slug": "kit" }))
        .await
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .client
        .delete(app.url(&format!("/api/products/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .client
        .delete(app.url(&format!("/api/products/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
