//! HTTP-level tests for the lookup routes.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Local;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use defense_lookup::config::ColumnConfig;
use defense_lookup::dataset::{CsvFile, DataStore, InlineCsv, LoadError};
use defense_lookup::lookup::LookupService;
use defense_lookup::server::{create_router, AppState};

fn fixture_csv() -> String {
    let today = Local::now().date_naive().format("%Y-%m-%d");
    format!(
        "CEDULA,APELLIDOS Y NOMBRES ,OPCIÓN DE TITULACIÓN,FECHA SIMPLE,HORA,ENLACES\n\
         0987654321,Jane Doe,Examen complexivo,{today},10:00,http://x\n\
         1100000001,John Roe,,,,\n\
         1100000002,Ana Paz,Proyecto técnico,2000-01-15,08:30,\n\
         1100000001,Shadowed Row,,2000-01-01,,\n"
    )
}

fn app_with(store: DataStore) -> axum::Router {
    create_router(Arc::new(AppState::new(LookupService::new(store))))
}

fn app() -> axum::Router {
    app_with(DataStore::open(
        &InlineCsv::new(fixture_csv()),
        &ColumnConfig::default(),
    ))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn defense_today_json() {
    let (status, body) = get_json(app(), "/api/defense/0987654321").await;
    let today = Local::now().date_naive().format("%d/%m/%Y").to_string();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["option"], "Examen complexivo");
    assert_eq!(body["date"], today);
    assert_eq!(body["time"], "10:00");
    assert_eq!(body["link"], "http://x");
    assert_eq!(body["is_today"], true);
    assert_eq!(body["schedule"], "today");
}

#[tokio::test]
async fn unscheduled_defense_json() {
    let (status, body) = get_json(app(), "/api/defense/1100000001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "John Roe");
    assert_eq!(body["option"], "not specified");
    assert_eq!(body["date"], "not scheduled");
    assert_eq!(body["time"], "not specified");
    assert_eq!(body["link"], "#");
    assert_eq!(body["is_today"], false);
    assert_eq!(body["schedule"], "not_scheduled");
}

#[tokio::test]
async fn past_defense_is_scheduled_summary() {
    let (status, body) = get_json(app(), "/api/defense/1100000002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "15/01/2000");
    assert_eq!(body["schedule"], "scheduled");
}

#[tokio::test]
async fn invalid_input_json() {
    let (status, body) = get_json(app(), "/api/defense/abc123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
}

#[tokio::test]
async fn not_found_json() {
    let (status, body) = get_json(app(), "/api/defense/0000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn data_unavailable_json() {
    let app = app_with(DataStore::unavailable(LoadError::Empty));
    let (status, body) = get_json(app, "/api/defense/0987654321").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "data_unavailable");
}

#[tokio::test]
async fn form_page_renders() {
    let (status, body) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/consulta""#));
    assert!(!body.contains("Error loading data"));
}

#[tokio::test]
async fn form_page_shows_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::open(
        &CsvFile::new(dir.path().join("datos_limpios.csv")),
        &ColumnConfig::default(),
    );
    let (status, body) = get(app_with(store), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error loading data"));
}

#[tokio::test]
async fn form_submission_today() {
    let (status, body) = get(app(), "/consulta?cedula=%200987654321%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Information found for: <strong>Jane Doe</strong>"));
    assert!(body.contains("You have a defense TODAY!"));
    assert!(body.contains(r#"<a href="http://x">Join the meeting</a>"#));
}

#[tokio::test]
async fn form_submission_errors() {
    let (status, body) = get(app(), "/consulta?cedula=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("digits only"));

    let (status, body) = get(app(), "/consulta").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("digits only"));

    let (status, body) = get(app(), "/consulta?cedula=0000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No student was found"));
}

#[tokio::test]
async fn health_reports_record_count() {
    let (status, body) = get_json(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataset"], "loaded");
    assert_eq!(body["records"], 4);
}

#[tokio::test]
async fn warnings_list_duplicates() {
    let (status, body) = get_json(app(), "/api/dataset/warnings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["columns"]["option"], "OPCIÓN DE TITULACIÓN");
    let duplicates = body["duplicate_identities"].as_array().unwrap();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0]["identity"], "1100000001");
    assert_eq!(duplicates[0]["lines"], serde_json::json!([3, 5]));
}

#[tokio::test]
async fn dataset_loaded_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_csv().as_bytes()).unwrap();
    let store = DataStore::open(&CsvFile::new(file.path()), &ColumnConfig::default());

    let (status, body) = get_json(app_with(store), "/api/defense/1100000002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ana Paz");
}
