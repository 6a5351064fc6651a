//! End-to-end tests for the full hbnbd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! storage, real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hbnb_adapter_http_axum::router;
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{Config, SqliteStorage};
use hbnb_app::services::resource_service::ResourceService;

const UNKNOWN_ID: &str = "00000000-0000-4000-8000-000000000000";

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> router::App {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let storage = SqliteStorage::new(db.pool().clone());
    router::build(AppState::new(ResourceService::new(storage)))
}

async fn call(
    app: &router::App,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map_or_else(Body::empty, Body::from))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(app: &router::App, uri: &str, body: &Value) -> (StatusCode, Value) {
    call(app, Method::POST, uri, Some(body.to_string())).await
}

async fn put(app: &router::App, uri: &str, body: &Value) -> (StatusCode, Value) {
    call(app, Method::PUT, uri, Some(body.to_string())).await
}

async fn get(app: &router::App, uri: &str) -> (StatusCode, Value) {
    call(app, Method::GET, uri, None).await
}

async fn delete(app: &router::App, uri: &str) -> (StatusCode, Value) {
    call(app, Method::DELETE, uri, None).await
}

fn id_of(value: &Value) -> &str {
    value["id"].as_str().expect("created record should carry an id")
}

/// Ids of one record of each kind, linked together.
struct Fixture {
    state: Value,
    city: Value,
    user: Value,
    place: Value,
    review: Value,
    amenity: Value,
}

async fn fixture(app: &router::App) -> Fixture {
    let (_, state) = post(app, "/states", &json!({"name": "California"})).await;
    let (_, city) = post(
        app,
        &format!("/states/{}/cities", id_of(&state)),
        &json!({"name": "San Francisco"}),
    )
    .await;
    let (_, user) = post(
        app,
        "/users",
        &json!({"email": "guest@hbnb.io", "password": "secret"}),
    )
    .await;
    let (_, place) = post(
        app,
        &format!("/cities/{}/places", id_of(&city)),
        &json!({"user_id": id_of(&user), "name": "Loft"}),
    )
    .await;
    let (_, review) = post(
        app,
        &format!("/places/{}/reviews", id_of(&place)),
        &json!({"user_id": id_of(&user), "text": "Great stay"}),
    )
    .await;
    let (_, amenity) = post(app, "/amenities", &json!({"name": "Wifi"})).await;
    Fixture {
        state,
        city,
        user,
        place,
        review,
        amenity,
    }
}

// ---------------------------------------------------------------------------
// Status & stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_status_called() {
    let (status, body) = get(&app().await, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn should_count_zero_when_store_is_empty() {
    let (status, body) = get(&app().await, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let counts = body.as_object().unwrap();
    let mut keys: Vec<&str> = counts.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["amenities", "cities", "places", "reviews", "states", "users"]
    );
    assert!(counts.values().all(|count| count == &json!(0)));
}

#[tokio::test]
async fn should_count_one_of_each_when_fixture_loaded() {
    let app = app().await;
    fixture(&app).await;
    let (_, body) = get(&app, "/stats").await;
    assert_eq!(
        body,
        json!({
            "amenities": 1,
            "cities": 1,
            "places": 1,
            "reviews": 1,
            "states": 1,
            "users": 1,
        })
    );
}

// ---------------------------------------------------------------------------
// Create & read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_state_when_name_given() {
    let app = app().await;
    let (status, state) = post(&app, "/states", &json!({"name": "California"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(state["name"], "California");
    assert!(state["id"].is_string());
    assert!(state["created_at"].is_string());
    assert!(state["updated_at"].is_string());

    let (status, fetched) = get(&app, &format!("/states/{}", id_of(&state))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, state);
}

#[tokio::test]
async fn should_retrieve_every_created_record_when_fetched_by_id() {
    let app = app().await;
    let fx = fixture(&app).await;
    for (collection, record) in [
        ("states", &fx.state),
        ("cities", &fx.city),
        ("users", &fx.user),
        ("places", &fx.place),
        ("reviews", &fx.review),
        ("amenities", &fx.amenity),
    ] {
        let (status, fetched) = get(&app, &format!("/{collection}/{}", id_of(record))).await;
        assert_eq!(status, StatusCode::OK, "GET /{collection}");
        assert_eq!(&fetched, record);
    }
}

#[tokio::test]
async fn should_link_children_to_their_parents() {
    let app = app().await;
    let fx = fixture(&app).await;
    assert_eq!(fx.city["state_id"], fx.state["id"]);
    assert_eq!(fx.place["city_id"], fx.city["id"]);
    assert_eq!(fx.place["user_id"], fx.user["id"]);
    assert_eq!(fx.review["place_id"], fx.place["id"]);
    assert_eq!(fx.review["user_id"], fx.user["id"]);
}

#[tokio::test]
async fn should_list_children_when_parent_exists() {
    let app = app().await;
    let fx = fixture(&app).await;

    let (status, cities) = get(&app, &format!("/states/{}/cities", id_of(&fx.state))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cities, json!([fx.city]));

    let (_, places) = get(&app, &format!("/cities/{}/places", id_of(&fx.city))).await;
    assert_eq!(places, json!([fx.place]));

    let (_, reviews) = get(&app, &format!("/places/{}/reviews", id_of(&fx.place))).await;
    assert_eq!(reviews, json!([fx.review]));
}

#[tokio::test]
async fn should_return_empty_list_when_parent_has_no_children() {
    let app = app().await;
    let (_, state) = post(&app, "/states", &json!({"name": "Nevada"})).await;
    let (status, cities) = get(&app, &format!("/states/{}/cities", id_of(&state))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cities, json!([]));
}

#[tokio::test]
async fn should_keep_extra_attributes_when_creating() {
    let app = app().await;
    let (status, state) = post(
        &app,
        "/states",
        &json!({"name": "California", "capital": "Sacramento"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, fetched) = get(&app, &format!("/states/{}", id_of(&state))).await;
    assert_eq!(fetched["capital"], "Sacramento");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_non_json_body_for_every_resource() {
    let app = app().await;
    let fx = fixture(&app).await;
    let uris = [
        "/states".to_string(),
        format!("/states/{}/cities", id_of(&fx.state)),
        format!("/cities/{}/places", id_of(&fx.city)),
        format!("/places/{}/reviews", id_of(&fx.place)),
        "/users".to_string(),
        "/amenities".to_string(),
    ];
    for uri in &uris {
        for body in [None, Some("not json".to_string())] {
            let (status, error) = call(&app, Method::POST, uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "POST {uri}");
            assert_eq!(error, json!({"error": "Not a JSON"}));
        }
    }
}

#[tokio::test]
async fn should_reject_non_json_body_when_updating() {
    let app = app().await;
    let fx = fixture(&app).await;
    let uri = format!("/users/{}", id_of(&fx.user));
    let (status, error) = call(&app, Method::PUT, &uri, Some("[]".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({"error": "Not a JSON"}));
}

#[tokio::test]
async fn should_name_first_missing_field_for_every_resource() {
    let app = app().await;
    let fx = fixture(&app).await;
    let user_id = id_of(&fx.user);
    let cases = [
        ("/states".to_string(), json!({}), "Missing name"),
        (
            format!("/states/{}/cities", id_of(&fx.state)),
            json!({}),
            "Missing name",
        ),
        (
            format!("/cities/{}/places", id_of(&fx.city)),
            json!({"name": "Loft"}),
            "Missing user_id",
        ),
        (
            format!("/cities/{}/places", id_of(&fx.city)),
            json!({"user_id": user_id}),
            "Missing name",
        ),
        (
            format!("/places/{}/reviews", id_of(&fx.place)),
            json!({"text": "Great"}),
            "Missing user_id",
        ),
        (
            format!("/places/{}/reviews", id_of(&fx.place)),
            json!({"user_id": user_id}),
            "Missing text",
        ),
        ("/users".to_string(), json!({}), "Missing email"),
        (
            "/users".to_string(),
            json!({"email": "a@b.c"}),
            "Missing password",
        ),
        ("/amenities".to_string(), json!({}), "Missing name"),
    ];
    for (uri, body, message) in &cases {
        let (status, error) = post(&app, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "POST {uri} {body}");
        assert_eq!(error, json!({"error": message}));
    }
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_when_id_unknown_for_every_resource() {
    let app = app().await;
    for collection in ["states", "cities", "places", "reviews", "users", "amenities"] {
        let uri = format!("/{collection}/{UNKNOWN_ID}");
        let (status, _) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        let (status, _) = put(&app, &uri, &json!({"name": "x"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        let (status, body) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
        assert_eq!(body, json!({"error": "Not found"}));
    }
}

#[tokio::test]
async fn should_return_not_found_when_id_spelled_differently() {
    let app = app().await;
    let (_, state) = post(&app, "/states", &json!({"name": "California"})).await;
    let id = id_of(&state);
    for alias in [id.to_uppercase(), format!("urn:uuid:{id}")] {
        let (status, body) = get(&app, &format!("/states/{alias}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET /states/{alias}");
        assert_eq!(body, json!({"error": "Not found"}));
    }
}

#[tokio::test]
async fn should_return_not_found_when_parent_unknown_before_field_checks() {
    let app = app().await;
    for uri in [
        format!("/states/{UNKNOWN_ID}/cities"),
        format!("/cities/{UNKNOWN_ID}/places"),
        format!("/places/{UNKNOWN_ID}/reviews"),
    ] {
        let (status, _) = post(&app, &uri, &json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "POST {uri}");
        let (status, _) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
async fn should_return_not_found_when_city_posted_to_bad_state() {
    let (status, _) = post(
        &app().await,
        "/states/bad_id/cities",
        &json!({"name": "SF"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_author_unknown() {
    let app = app().await;
    let fx = fixture(&app).await;
    let (status, _) = post(
        &app,
        &format!("/places/{}/reviews", id_of(&fx.place)),
        &json!({"user_id": UNKNOWN_ID, "text": "Great"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_update_email_and_keep_id_when_id_in_body() {
    let app = app().await;
    let fx = fixture(&app).await;
    let uri = format!("/users/{}", id_of(&fx.user));

    let (status, updated) = put(&app, &uri, &json!({"email": "new@x.com", "id": "ignored"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], fx.user["id"]);
    assert_eq!(updated["email"], "new@x.com");

    let (_, fetched) = get(&app, &uri).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_refresh_updated_at_and_keep_protected_fields() {
    let app = app().await;
    let fx = fixture(&app).await;
    let uri = format!("/places/{}", id_of(&fx.place));
    std::thread::sleep(std::time::Duration::from_millis(2));

    let (status, updated) = put(
        &app,
        &uri,
        &json!({
            "name": "Penthouse",
            "max_guest": 4,
            "city_id": UNKNOWN_ID,
            "user_id": UNKNOWN_ID,
            "created_at": "2000-01-01T00:00:00.000000",
            "updated_at": "2000-01-01T00:00:00.000000",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Penthouse");
    assert_eq!(updated["max_guest"], 4);
    assert_eq!(updated["city_id"], fx.place["city_id"]);
    assert_eq!(updated["user_id"], fx.place["user_id"]);
    assert_eq!(updated["created_at"], fx.place["created_at"]);
    assert_ne!(updated["updated_at"], fx.place["updated_at"]);
}

#[tokio::test]
async fn should_store_value_verbatim_when_typed_field_has_other_type() {
    let app = app().await;
    let fx = fixture(&app).await;
    let uri = format!("/places/{}", id_of(&fx.place));
    let (status, updated) = put(&app, &uri, &json!({"number_rooms": "many", "name": 5})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["number_rooms"], "many");
    assert_eq!(updated["name"], 5);

    let (_, fetched) = get(&app, &uri).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_create_record_when_required_field_is_null() {
    let app = app().await;
    let (status, state) = post(&app, "/states", &json!({"name": null})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(state["name"], Value::Null);

    let (status, fetched) = get(&app, &format!("/states/{}", id_of(&state))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, state);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_after_delete_for_every_resource() {
    let app = app().await;
    let fx = fixture(&app).await;
    for (collection, record) in [
        ("reviews", &fx.review),
        ("places", &fx.place),
        ("cities", &fx.city),
        ("states", &fx.state),
        ("users", &fx.user),
        ("amenities", &fx.amenity),
    ] {
        let uri = format!("/{collection}/{}", id_of(record));
        let (status, body) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK, "DELETE {uri}");
        assert_eq!(body, json!({}));
        let (status, _) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
    }

    let (_, stats) = get(&app, "/stats").await;
    assert!(stats.as_object().unwrap().values().all(|n| n == &json!(0)));
}

#[tokio::test]
async fn should_keep_children_when_parent_deleted() {
    let app = app().await;
    let fx = fixture(&app).await;
    delete(&app, &format!("/states/{}", id_of(&fx.state))).await;
    let (status, city) = get(&app, &format!("/cities/{}", id_of(&fx.city))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(city, fx.city);
}
