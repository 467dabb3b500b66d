mod common;

use chrono::NaiveDate;
use common::mock_client;
use mealie_client::{
    CreateIngredientFood, CreatePlanEntry, CreateShoppingListItem, ImageSize, MealPlanQuery,
    OrderDirection, PaginationQuery, PlanEntryType, RecipeQuery,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_page() -> serde_json::Value {
    json!({"page": 1, "perPage": 50, "total": 0, "totalPages": 0, "items": []})
}

#[tokio::test]
async fn test_search_recipes_with_filters() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "5"))
        .and(query_param("search", "pasta"))
        .and(query_param("tags", "quick,vegan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "perPage": 5,
            "total": 1,
            "totalPages": 1,
            "items": [{"id": "r1", "slug": "pasta-primavera", "name": "Pasta Primavera"}],
            "next": null,
            "previous": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let query = RecipeQuery::new()
        .pagination(PaginationQuery::new().page(1).per_page(5).search("pasta"))
        .tags(["quick", "vegan"]);

    let page = client.recipes().list(&query).await.expect("search should succeed");

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "pasta-primavera");
}

#[tokio::test]
async fn test_create_and_retrieve_recipe() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .and(body_json(json!({"name": "Cherry Tomato Salad"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!("cherry-tomato-salad")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/cherry-tomato-salad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r2",
            "slug": "cherry-tomato-salad",
            "name": "Cherry Tomato Salad",
            "recipeIngredient": [{"display": "200 g cherry tomatoes"}],
            "recipeInstructions": [{"text": "Halve"}, {"text": "Season"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let slug = client
        .recipes()
        .create("Cherry Tomato Salad")
        .await
        .expect("create should succeed");
    assert_eq!(slug, "cherry-tomato-salad");

    let recipe = client.recipes().get(&slug).await.expect("get should succeed");
    assert_eq!(recipe.summary.name.as_deref(), Some("Cherry Tomato Salad"));
    assert_eq!(recipe.recipe_instructions.len(), 2);
}

#[tokio::test]
async fn test_get_recipe_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": {"message": "Recipe not found"}
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.recipes().get("does-not-exist").await.unwrap_err();

    assert_eq!(err.http_status(), Some(404));
    assert_eq!(err.message(), "HTTP 404: Not Found");
}

#[tokio::test]
async fn test_download_recipe_image_returns_raw_bytes() {
    let server = MockServer::start().await;
    let image = vec![0x52, 0x49, 0x46, 0x46, 0x00, 0x01];

    Mock::given(method("GET"))
        .and(path("/api/media/recipes/r1/images/min-original.webp"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/webp")
                .set_body_bytes(image.clone()),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let bytes = client
        .recipes()
        .image("r1", ImageSize::Min)
        .await
        .expect("download should succeed");

    assert_eq!(bytes, image);
}

#[tokio::test]
async fn test_upload_recipe_image_sends_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/recipes/soup/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"image": "k3y"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client
        .recipes()
        .update_image("soup", b"png-bytes".to_vec(), "png")
        .await
        .expect("upload should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {}",
        content_type
    );
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"extension\""));
    assert!(body.contains("png-bytes"));
}

#[tokio::test]
async fn test_create_food_and_list_units() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/foods"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Cherry Tomatoes", "description": ""})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f1",
            "name": "Cherry Tomatoes",
            "description": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/units"))
        .and(query_param("orderBy", "name"))
        .and(query_param("orderDirection", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "perPage": 50,
            "total": 1,
            "totalPages": 1,
            "items": [{"id": "u1", "name": "gram", "abbreviation": "g"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let food = client
        .foods()
        .create(&CreateIngredientFood {
            name: "Cherry Tomatoes".to_string(),
            ..Default::default()
        })
        .await
        .expect("create food should succeed");
    assert_eq!(food.id, "f1");

    let units = client
        .units()
        .list(&PaginationQuery::new().order_by("name", OrderDirection::Asc))
        .await
        .expect("list units should succeed");
    assert_eq!(units.items[0].abbreviation, "g");
}

#[tokio::test]
async fn test_organizers_use_their_own_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/organizers/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/organizers/categories/slug/dinner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "name": "Dinner",
            "slug": "dinner"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.tags().list(&PaginationQuery::new()).await.unwrap();
    let category = client.categories().get_by_slug("dinner").await.unwrap();

    assert_eq!(category.name, "Dinner");
}

#[tokio::test]
async fn test_shopping_list_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/households/shopping/items"))
        .and(body_json(json!({
            "shoppingListId": "list-1",
            "note": "Cherry Tomatoes",
            "quantity": 2.0,
            "checked": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "createdItems": [{
                "id": "item-1",
                "shoppingListId": "list-1",
                "note": "Cherry Tomatoes",
                "quantity": 2.0
            }],
            "updatedItems": [],
            "deletedItems": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/households/shopping/items"))
        .and(query_param("ids", "item-1,item-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "2 items deleted",
            "error": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let items = client.households().shopping_items();

    let created = items
        .create(&CreateShoppingListItem {
            shopping_list_id: "list-1".to_string(),
            note: Some("Cherry Tomatoes".to_string()),
            quantity: 2.0,
            ..Default::default()
        })
        .await
        .expect("create item should succeed");
    assert_eq!(created.created_items[0].id, "item-1");

    let deleted = items
        .delete_many(&["item-1".to_string(), "item-2".to_string()])
        .await
        .expect("bulk delete should succeed");
    assert!(!deleted.error);
}

#[tokio::test]
async fn test_meal_plan_range_and_create() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/households/mealplans"))
        .and(query_param("start_date", "2024-05-01"))
        .and(query_param("end_date", "2024-05-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/households/mealplans"))
        .and(body_json(json!({
            "date": "2024-05-02",
            "entryType": "dinner",
            "title": "Leftovers",
            "text": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "date": "2024-05-02",
            "entryType": "dinner",
            "title": "Leftovers"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let plans = client.mealplans();
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();

    let page = plans
        .list(&MealPlanQuery::between(start, end))
        .await
        .expect("list should succeed");
    assert!(page.items.is_empty());

    let entry = plans
        .create(&CreatePlanEntry {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            entry_type: PlanEntryType::Dinner,
            title: "Leftovers".to_string(),
            text: String::new(),
            recipe_id: None,
        })
        .await
        .expect("create should succeed");
    assert_eq!(entry.id, 7);
    assert_eq!(entry.entry_type, PlanEntryType::Dinner);
}

#[tokio::test]
async fn test_validation_error_exposes_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/organizers/tools"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "name"], "msg": "field required"}]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.tools().create("").await.unwrap_err();

    assert_eq!(err.http_status(), Some(422));
    assert_eq!(err.http_status_text(), Some("Unprocessable Entity"));
    let body = err
        .response()
        .and_then(|b| b.as_json())
        .expect("json body");
    assert_eq!(body["detail"][0]["msg"], "field required");
}

#[tokio::test]
async fn test_about_is_localized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/app/about"))
        .and(header("accept-language", "de-DE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "production": true,
            "version": "v2.8.0",
            "demoStatus": false,
            "allowSignup": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let info = client.about().locale("de-DE").info().await.unwrap();

    assert_eq!(info.version, "v2.8.0");
    assert!(info.allow_signup);
}
