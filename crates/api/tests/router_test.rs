//! End-to-end tests of the router against a mocked database connection.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;
use transco_api::{AppState, create_router};
use transco_db::entities::{cargo_transports, companies, drivers, passenger_transports};
use uuid::Uuid;

fn app(db: DatabaseConnection) -> Router {
    create_router(AppState::new(db, 20))
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn company(id: Uuid, name: &str) -> companies::Model {
    let now = chrono::Utc::now().into();
    companies::Model {
        id,
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn driver(company_id: Uuid, first_name: &str) -> drivers::Model {
    let now = chrono::Utc::now().into();
    drivers::Model {
        id: Uuid::now_v7(),
        company_id,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        salary: dec!(3000),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(empty_db()), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_report_for_missing_company_is_empty_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();

    let uri = format!("/api/report/companies/{}", Uuid::now_v7());
    let (status, body) = send(app(db), get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_report_with_inverted_window_is_400() {
    let uri = format!(
        "/api/report/companies/{}?fromDate=2024-02-01&toDate=2024-01-01",
        Uuid::now_v7()
    );
    let (status, body) = send(app(empty_db()), get(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_report_aggregates_transports() {
    let company_id = Uuid::now_v7();
    let jane = driver(company_id, "Jane");
    let now = chrono::Utc::now().into();

    let cargo = cargo_transports::Model {
        id: Uuid::now_v7(),
        company_id,
        driver_id: jane.id,
        customer_id: Uuid::now_v7(),
        vehicle_id: Uuid::now_v7(),
        start_address: "Sofia".to_string(),
        end_address: "Ruse".to_string(),
        start_date: date("2024-01-10"),
        end_date: date("2024-01-11"),
        price: Some(dec!(100)),
        is_paid: true,
        cargo_type: "grain".to_string(),
        cargo_weight: 500,
        created_at: now,
        updated_at: now,
    };
    let passenger = passenger_transports::Model {
        id: Uuid::now_v7(),
        company_id,
        driver_id: jane.id,
        customer_id: Uuid::now_v7(),
        vehicle_id: Uuid::now_v7(),
        start_address: "Sofia".to_string(),
        end_address: "Varna".to_string(),
        start_date: date("2024-01-12"),
        end_date: date("2024-01-12"),
        price: Some(dec!(50)),
        is_paid: false,
        number_of_passengers: 20,
        created_at: now,
        updated_at: now,
    };
    let unpaid_id = passenger.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![company(company_id, "Speedy")]])
        .append_query_results([vec![(cargo, jane.clone())]])
        .append_query_results([vec![(passenger, jane.clone())]])
        .into_connection();

    let uri = format!("/api/report/companies/{company_id}?toDate=2024-12-31");
    let (status, body) = send(app(db), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["totalFinishedPassengerTransports"], 1);
    assert_eq!(json["totalFinishedCargoTransports"], 1);
    assert_eq!(json["totalRevenue"], "100.00");
    assert_eq!(json["unpaidTransports"][0]["id"], unpaid_id.to_string());
    assert_eq!(json["unpaidTransports"][0]["kind"], "passenger");
    assert_eq!(json["drivers"][0]["name"], "Jane Doe");
    assert_eq!(json["drivers"][0]["totalCompletedTransports"], 2);
    assert_eq!(json["drivers"][0]["generatedRevenue"], "100.00");
    assert!(json.get("companyId").is_none());
}

#[tokio::test]
async fn test_list_companies() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            company(Uuid::now_v7(), "Acme"),
            company(Uuid::now_v7(), "Borealis"),
        ]])
        .into_connection();

    let (status, body) = send(app(db), get("/api/companies?sortBy=name=asc&page=0")).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["name"], "Acme");
}

#[tokio::test]
async fn test_list_companies_rejects_unknown_sort_field() {
    let (status, body) = send(app(empty_db()), get("/api/companies?sortBy=salary=asc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_companies_rejects_unknown_direction() {
    let (status, _) = send(app(empty_db()), get("/api/companies?sortBy=name=sideways")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_company_is_empty_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();

    let uri = format!("/api/companies/{}", Uuid::now_v7());
    let (status, body) = send(app(db), get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_create_company_with_blank_name_is_400() {
    let (status, body) = send(
        app(empty_db()),
        post_json("/api/companies", r#"{"name": "   "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_drivers_rejects_filter_on_salary() {
    let uri = format!(
        "/api/companies/{}/drivers?filterBy=salary=3000",
        Uuid::now_v7()
    );
    let (status, _) = send(app(empty_db()), get(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
