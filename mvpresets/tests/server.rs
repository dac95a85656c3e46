#![cfg(feature = "mvserver")]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use mvapp::{WebAppExt, Webapp};
use mvpresets::{PresetStore, PresetsExt, StreamEntry};
use mvserver::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Serveur assemblé comme dans le binaire : API des presets puis page web
async fn assembled(dir: &tempfile::TempDir) -> anyhow::Result<Router> {
    let store = PresetStore::open(dir.path())?;
    store.write("lobby", &[StreamEntry::new("Desk", "http://cam1")])?;

    let mut server = Server::new("test", "localhost", 0);
    server.init_presets_api(store).await;
    server.add_webapp::<Webapp>("/").await;
    Ok(server.router().await)
}

async fn send(router: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, String)> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::get(uri).body(Body::empty())?)
}

#[tokio::test]
async fn missing_preset_is_404_json() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;

    let (status, body) = send(&router, get("/api/preset/doesnotexist")?).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({"error": "Preset not found"}));
    Ok(())
}

#[tokio::test]
async fn empty_body_is_invalid_data() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;
    let request = Request::post("/api/preset/foo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))?;

    let (status, body) = send(&router, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({"error": "Invalid data"}));
    Ok(())
}

#[tokio::test]
async fn registered_routes_take_precedence_over_page() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;

    let (status, body) = send(&router, get("/api/preset/lobby")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body)?,
        json!({"streams": [{"name": "Desk", "url": "http://cam1"}]})
    );

    let (status, body) = send(&router, get("/api/presets")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({"presets": ["lobby"]}));
    Ok(())
}

#[tokio::test]
async fn preset_path_serves_page() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;

    let (status, body) = send(&router, get("/lobby")?).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>MultiView</title>"));
    Ok(())
}

#[tokio::test]
async fn empty_preset_name_is_404_json() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;

    for uri in ["/api/preset/", "/api/nope"] {
        let (status, body) = send(&router, get(uri)?).await?;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(serde_json::from_str::<Value>(&body)?, json!({"error": "Not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn swagger_document_is_registered() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let router = assembled(&dir).await?;

    let (status, body) = send(&router, get("/api-docs/presets.json")?).await?;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body)?;
    assert!(doc["paths"]["/api/preset/{name}"].is_object());
    assert_eq!(
        doc["components"]["schemas"]["SavePresetRequest"]["required"],
        json!(["streams"])
    );
    Ok(())
}
