mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::spawn_app;

async fn create_slide(app: &common::TestApp, title: &str, order: i32, is_active: bool) -> Value {
    let response = app
        .client
        .post(app.url("/api/carousel"))
        .json(&json!({
            "title": title,
            "imageUrl": format!("/uploads/{title}.jpg"),
            "order": order,
            "isActive": is_active
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON")
}

#[tokio::test]
async fn test_empty_carousel() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/api/carousel"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_carousel_lists_active_images_in_order() {
    let app = spawn_app().await;
    create_slide(&app, "third", 3, false).await;
    create_slide(&app, "first", 1, true).await;
    create_slide(&app, "second", 2, true).await;

    let body = app
        .client
        .get(app.url("/api/carousel"))
        .send()
        .await
        .expect("Failed to send request")
        .json::<Vec<Value>>()
        .await
        .expect("Failed to parse response JSON");

    let orders: Vec<i64> = body.iter().map(|slide| slide["order"].as_i64().unwrap()).collect();
    assert_eq!(orders, vec![1, 2]);
    assert_eq!(body[0]["title"], "first");
}

#[tokio::test]
async fn test_update_and_delete_carousel_image() {
    let app = spawn_app().await;
    let slide = create_slide(&app, "tractors", 1, true).await;
    let id = slide["id"].as_i64().unwrap();

    let response = app
        .client
        .put(app.url(&format!("/api/carousel/{id}")))
        .json(&json!({ "title": "Tractors on sale" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(updated["title"], "Tractors on sale");
    assert_eq!(updated["imageUrl"], slide["imageUrl"]);
    assert_eq!(updated["order"], 1);

    let response = app
        .client
        .delete(app.url(&format!("/api/carousel/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .client
        .delete(app.url(&format!("/api/carousel/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["error"], "Carousel image not found");
}

#[tokio::test]
async fn test_create_carousel_image_with_missing_fields() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/carousel"))
        .json(&json!({ "title": "" , "imageUrl": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|err| err["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["imageUrl", "title"]);

    let response = app
        .client
        .post(app.url("/api/carousel"))
        .json(&json!({ "title": "No image" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["errors"][0]["field"], "body");
}
