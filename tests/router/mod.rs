//! Tests for the assembled router, requests go through routing, extractors and layers.

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use donation_map::{
    model::donation::DonationDto,
    server::{model::app::AppState, router::routes},
};
use donation_map_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::response_json;

fn frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend")
}

async fn app() -> Result<(TestContext, Router), TestError> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let test = TestBuilder::new()
        .with_donation_tables()
        .with_mock_donation(1, date, "Tel Aviv")
        .with_mock_donation(2, date, "Haifa")
        .build()
        .await?;

    let router = routes(&frontend_dir()).with_state(test.to_app_state::<AppState>());

    Ok((test, router))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect the query string to be parsed into the donation filters
#[tokio::test]
async fn routes_donations_with_query_string() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router
        .oneshot(get("/donations?donation_date=2024-03-10&city=Haifa"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let donations: Vec<DonationDto> = response_json(response).await;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].city, "Haifa");

    Ok(())
}

#[tokio::test]
async fn routes_cities() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router.oneshot(get("/cities")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cities: Vec<String> = response_json(response).await;
    assert_eq!(cities, vec!["Haifa".to_string(), "Tel Aviv".to_string()]);

    Ok(())
}

/// Expect 400 for a malformed date passed through the query string
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router
        .oneshot(get("/donations?donation_date=10-03-2024"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect cross-origin requests to be allowed from any origin
#[tokio::test]
async fn allows_any_origin() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let request = Request::builder()
        .uri("/cities")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    Ok(())
}

/// Expect the root path to serve the frontend entry page
#[tokio::test]
async fn serves_frontend_index() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("/frontend/app.js"));

    Ok(())
}

#[tokio::test]
async fn serves_frontend_assets() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router.oneshot(get("/frontend/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect the generated OpenAPI document to describe both endpoints
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let (_test, router) = app().await?;

    let response = router
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document: serde_json::Value = response_json(response).await;
    assert!(document["paths"]["/donations"]["get"].is_object());
    assert!(document["paths"]["/cities"]["get"].is_object());

    Ok(())
}
