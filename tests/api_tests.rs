use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use gestor_tareas::{app, config::AppConfig, state::AppState};

async fn spawn_app() -> (Router, SqlitePool) {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("run migrations");

    let config = Arc::new(AppConfig {
        database_url: "sqlite::memory:".into(),
    });
    (app::build_app(AppState::from_parts(db.clone(), config)), db)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn count_tareas(db: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tareas")
        .fetch_one(db)
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _db) = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn crear_usuario_returns_full_record() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "Ejemplo", "email": "ejemplo@test.com", "premium": false}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["nombre"], "Ejemplo");
    assert_eq!(body["email"], "ejemplo@test.com");
    assert_eq!(body["estado"], "Activo");
    assert_eq!(body["premium"], false);
}

#[tokio::test]
async fn crear_usuario_rejects_bad_payloads() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "  ", "email": "ejemplo@test.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, body) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "Ejemplo", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (app, _db) = spawn_app().await;

    let (status, _) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "Uno", "email": "dup@test.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "Dos", "email": "dup@test.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn crear_tarea_happy_path() {
    let (app, _db) = spawn_app().await;

    let (status, _) = post_json(
        &app,
        "/usuarios",
        json!({"nombre": "Ejemplo", "email": "ejemplo@test.com", "premium": false}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/tareas",
        json!({
            "nombre": "Mi primera tarea",
            "descripcion": "Descripción de ejemplo",
            "usuario_id": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["nombre"], "Mi primera tarea");
    assert_eq!(body["descripcion"], "Descripción de ejemplo");
    assert_eq!(body["estado"], "Pendiente");
    assert_eq!(body["usuario_id"], 1);
    assert!(body["fecha_creacion"].is_string());
    assert_eq!(body["fecha_creacion"], body["fecha_modificacion"]);
}

#[tokio::test]
async fn crear_tarea_unknown_usuario_is_404_and_atomic() {
    let (app, db) = spawn_app().await;

    let before = count_tareas(&db).await;
    let (status, body) = post_json(
        &app,
        "/tareas",
        json!({"nombre": "x", "usuario_id": 999}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
    assert_eq!(count_tareas(&db).await, before);
}

#[tokio::test]
async fn crear_tarea_rejects_empty_nombre() {
    let (app, db) = spawn_app().await;

    let (status, _) = post_json(
        &app,
        "/tareas",
        json!({"nombre": "", "usuario_id": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count_tareas(&db).await, 0);
}
