use bucket_list::server::{router, AppState};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::net::TcpListener;

const CATALOG: &str = r#"[
  {
    "id": "p10",
    "title": "Parisian Streets",
    "image": {"src": "parisian-streets.jpg", "alt": "Charming streets of Paris."},
    "lat": 48.8566,
    "lon": 2.3522
  },
  {
    "id": "p12",
    "title": "Venetian Canals",
    "image": {"src": "venetian-canals.jpg", "alt": "Gondolas on the canals."},
    "lat": 45.4408,
    "lon": 12.3155
  }
]"#;

struct Backend {
    url: String,
    data_dir: PathBuf,
    _dirs: Vec<TempDir>,
}

async fn spawn_backend(data_dir: &Path, images_dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = router(AppState::new(data_dir), images_dir);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", address)
}

async fn seeded_backend() -> Backend {
    let data = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    std::fs::write(data.path().join("places.json"), CATALOG).unwrap();
    std::fs::write(data.path().join("user-places.json"), "[]").unwrap();
    std::fs::write(images.path().join("parisian-streets.jpg"), b"\xFF\xD8jpeg").unwrap();

    let url = spawn_backend(data.path(), images.path()).await;
    Backend {
        url,
        data_dir: data.path().to_path_buf(),
        _dirs: vec![data, images],
    }
}

fn place_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Title {}", id),
        "image": {"src": format!("{}.jpg", id), "alt": "alt"},
        "lat": 10.0,
        "lon": 20.0
    })
}

#[tokio::test]
async fn test_get_places_returns_catalog() {
    let backend = seeded_backend().await;

    let response = reqwest::get(format!("{}/places", backend.url)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let places = body["places"].as_array().unwrap();
    assert_eq!(places.len(), 2);
    assert_eq!(places[0]["id"], "p10");
    assert_eq!(places[1]["image"]["src"], "venetian-canals.jpg");
}

#[tokio::test]
async fn test_user_places_round_trip_through_put() {
    let backend = seeded_backend().await;
    let client = reqwest::Client::new();

    let initial: serde_json::Value = client
        .get(format!("{}/user-places", backend.url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(initial, serde_json::json!({"places": []}));

    let response = client
        .put(format!("{}/user-places", backend.url))
        .json(&serde_json::json!({"places": [place_json("p12"), place_json("p10")]}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User places updated!");

    let stored: serde_json::Value = client
        .get(format!("{}/user-places", backend.url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored["places"][0]["id"], "p12");
    assert_eq!(stored["places"][1]["id"], "p10");

    let raw = std::fs::read_to_string(backend.data_dir.join("user-places.json")).unwrap();
    assert!(raw.contains("\n  {\n    \"id\": \"p12\""));
}

#[tokio::test]
async fn test_put_rejects_malformed_payloads_without_writing() {
    let backend = seeded_backend().await;
    let client = reqwest::Client::new();
    let file = backend.data_dir.join("user-places.json");
    std::fs::write(&file, "[\"untouched\"]").unwrap();

    let bad_bodies = [
        serde_json::json!({"places": "p1"}),
        serde_json::json!({"places": {"id": "p1"}}),
        serde_json::json!({"items": []}),
        serde_json::json!({"places": [{"id": "p1"}]}),
    ];

    for body in bad_bodies {
        let response = client
            .put(format!("{}/user-places", backend.url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "body {}", body);

        let message: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            message["message"],
            "Invalid data format. Expected an array of places."
        );
    }

    let response = client
        .put(format!("{}/user-places", backend.url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "[\"untouched\"]");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_overlapping_puts_all_succeed_and_leave_valid_json() {
    let backend = seeded_backend().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..12 {
        let ids: Vec<String> = (0..=i).map(|n| format!("p{}", n)).collect();
        let places: Vec<serde_json::Value> = ids.iter().map(|id| place_json(id)).collect();
        let request = client
            .put(format!("{}/user-places", backend.url))
            .json(&serde_json::json!({ "places": places }));
        handles.push(tokio::spawn(async move { request.send().await }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.status(), 200);
    }

    let raw = std::fs::read_to_string(backend.data_dir.join("user-places.json")).unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert!(!stored.is_empty());
    assert_eq!(stored[0]["id"], "p0");
}

#[tokio::test]
async fn test_missing_files_return_500() {
    let data = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    let url = spawn_backend(data.path(), images.path()).await;

    let places = reqwest::get(format!("{}/places", url)).await.unwrap();
    assert_eq!(places.status(), 500);
    let body: serde_json::Value = places.json().await.unwrap();
    assert_eq!(body["message"], "Failed to load places.");

    let user_places = reqwest::get(format!("{}/user-places", url)).await.unwrap();
    assert_eq!(user_places.status(), 500);
    let body: serde_json::Value = user_places.json().await.unwrap();
    assert_eq!(body["message"], "Failed to load user places.");
}

#[tokio::test]
async fn test_write_failure_returns_500() {
    let not_a_dir = tempfile::NamedTempFile::new().unwrap();
    let images = TempDir::new().unwrap();
    let url = spawn_backend(not_a_dir.path(), images.path()).await;

    let response = reqwest::Client::new()
        .put(format!("{}/user-places", url))
        .json(&serde_json::json!({"places": [place_json("p1")]}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Failed to update user places.");
}

#[tokio::test]
async fn test_static_images_and_not_found_fallback() {
    let backend = seeded_backend().await;

    let image = reqwest::get(format!("{}/parisian-streets.jpg", backend.url))
        .await
        .unwrap();
    assert_eq!(image.status(), 200);
    assert_eq!(image.bytes().await.unwrap().as_ref(), b"\xFF\xD8jpeg");

    let missing = reqwest::get(format!("{}/no-such-page", backend.url))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"message": "404 - Not Found"}));
}

#[tokio::test]
async fn test_cors_headers_and_preflight() {
    let backend = seeded_backend().await;
    let client = reqwest::Client::new();

    let preflight = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/user-places", backend.url),
        )
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(preflight.status(), 200);
    assert_eq!(
        preflight.headers()["access-control-allow-origin"],
        "*"
    );
    let methods = preflight.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("GET"));

    let response = client
        .get(format!("{}/places", backend.url))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
