//! HTTP API tests against the in-process router

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use frigo_match::web::server::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router().expect("embedded corpus should load")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app(), request).await
}

#[tokio::test]
async fn test_list_recipes() {
    let request = Request::builder()
        .uri("/api/recipes")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 12);
    assert_eq!(json["recipes"][11]["title"], "Crêpes");
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "frigo-match");
    assert!(json["endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("POST /api/suggestions")));
}

#[tokio::test]
async fn test_suggestions_over_embedded_corpus() {
    let (status, json) = post_json(
        "/api/suggestions",
        &json!({"fridge": ["oeufs", "farine", "lait", "beurre", "sucre"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["suggestions"][0]["title"], "Crêpes");
    assert_eq!(json["suggestions"][0]["matchScore"], 1.0);
    assert_eq!(json["processingInfo"]["recipesConsidered"], 12);
}

#[tokio::test]
async fn test_suggestions_with_inline_recipes() {
    let (status, json) = post_json(
        "/api/suggestions",
        &json!({
            "fridge": ["tomates", "oeufs", "fromage"],
            "recipes": [
                {"title": "Salade", "ingredients": ["tomate", "oeuf", "basilic"]},
                {"title": "Quiche", "ingredients": ["pâte brisée"]}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    let top = &json["suggestions"][0];
    assert_eq!(top["matchedIngredients"], json!(["tomate", "oeuf"]));
    assert_eq!(top["missingIngredients"], json!(["basilic"]));
    assert!((top["matchScore"].as_f64().unwrap() - 2.0 / 3.0).abs() < 1e-9);
    assert!(top["imageUrl"].is_null());
}

#[tokio::test]
async fn test_suggestions_respect_vegetarian_diet() {
    let recipes = json!([
        {"title": "Poulet basquaise", "ingredients": ["poulet", "poivrons"]},
        {"title": "Salade du chef", "ingredients": ["poulet", "boeuf", "salade"]}
    ]);

    let (_, open) = post_json(
        "/api/suggestions",
        &json!({"fridge": ["poulet"], "recipes": recipes, "config": {"minMatchRatio": 0.0}}),
    )
    .await;
    assert_eq!(open["count"], 2);

    let (status, filtered) = post_json(
        "/api/suggestions",
        &json!({
            "fridge": ["poulet"],
            "recipes": recipes,
            "config": {"minMatchRatio": 0.0, "diets": ["vegetarien"]}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["count"], 0);
}

#[tokio::test]
async fn test_suggestions_expiring_bonus() {
    let (_, json) = post_json(
        "/api/suggestions",
        &json!({
            "fridge": ["riz", "yaourt"],
            "expiring": ["yaourt"],
            "config": {"minMatchRatio": 0.0},
            "recipes": [
                {"title": "Riz", "ingredients": ["riz", "basilic"]},
                {"title": "Yaourt au miel", "ingredients": ["yaourt", "miel"]}
            ]
        }),
    )
    .await;

    assert_eq!(json["suggestions"][0]["title"], "Yaourt au miel");
    assert!((json["suggestions"][0]["expiryBonus"].as_f64().unwrap() - 0.1).abs() < 1e-9);
    assert!((json["suggestions"][1]["expiryBonus"].as_f64().unwrap()).abs() < 1e-12);
}

#[tokio::test]
async fn test_empty_fridge_returns_no_suggestions() {
    let (status, json) = post_json("/api/suggestions", &json!({"fridge": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_match_endpoint() {
    let (status, json) = post_json(
        "/api/match",
        &json!({"fridgeItem": "spaghetti", "ingredient": "pâtes"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isMatch"], true);
    assert_eq!(json["decidedBy"], "synonym");

    let (_, json) = post_json(
        "/api/match",
        &json!({"fridgeItem": "pâtes", "ingredient": "pâte brisée"}),
    )
    .await;
    assert_eq!(json["isMatch"], false);
    assert_eq!(json["decidedBy"], "exclusion");
}

#[tokio::test]
async fn test_menu_endpoint() {
    let (status, json) = post_json(
        "/api/menu",
        &json!({"fridge": ["oeufs", "farine"], "weekStart": "2024-05-08", "servings": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["menu"]["weekStart"], "2024-05-06");
    assert_eq!(json["menu"]["servings"], 2);
    let entries = json["menu"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 14);
    assert_eq!(entries[13]["date"], "2024-05-12");
    assert_eq!(entries[13]["mealType"], "dinner");

    let shopping = json["shoppingList"].as_array().unwrap();
    assert!(shopping.iter().all(|item| item["name"] != "oeufs"));
}

#[tokio::test]
async fn test_menu_with_no_allowed_recipe_is_all_free_meals() {
    let (status, json) = post_json(
        "/api/menu",
        &json!({
            "fridge": ["oeufs"],
            "weekStart": "2024-05-06",
            "diets": ["vegan", "custom"],
            "customExclusionCategories": ["ail", "poisson"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let entries = json["menu"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 14);
    assert!(entries
        .iter()
        .all(|e| e["recipeTitle"] == "Repas libre" && e["recipeId"].is_null()));
    assert_eq!(json["shoppingList"], json!([]));
}
