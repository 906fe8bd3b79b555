//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. API endpoints are registered with their OpenAPI specifications, Swagger UI
//! is served at `/api/docs` and the static frontend is served from the configured directory.

use std::path::Path;

use axum::{http::Method, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Frontend entry page, `<frontend_dir>/index.html`
/// - `GET /frontend/*` - Static frontend assets
/// - `GET /donations` - Stations open on a date, optionally filtered by city
/// - `GET /cities` - Distinct cities with stations
/// - `GET /api/docs` - Swagger UI, specification at `/api/docs/openapi.json`
///
/// Cross-origin `GET` requests are allowed from any origin.
///
/// # Example
/// ```ignore
/// let router = routes(&config.frontend_dir).with_state(AppState::from(db));
/// ```
pub fn routes(frontend_dir: &Path) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Donation Map", description = "Blood donation station API"), tags(
        (name = controller::donation::DONATION_TAG, description = "Donation station routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::donation::get_donations))
        .routes(routes!(controller::donation::get_cities))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/frontend", ServeDir::new(frontend_dir))
        .layer(cors)
}
