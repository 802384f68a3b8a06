//! # API REST
//!
//! REST API implementation for the restaurant backend.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON and plain-text responses, status codes, CORS)
//!
//! Uses `menu-core` for all reads and writes and `api-shared` for request/response bodies.

#![warn(rust_2018_idioms)]

mod error;
mod handlers;

use api_shared::{HealthRes, LoginReq, LoginRes, PlaceOrderReq, SignupReq};
use axum::{
    routing::{get, post},
    Router,
};
use menu_core::{CatalogService, FoodOrderService, ReservationService, SharedStore, UserService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
///
/// Every service holds a clone of the same store handle, opened once at startup.
#[derive(Clone)]
pub struct AppState {
    catalog: CatalogService,
    reservations: ReservationService,
    food_orders: FoodOrderService,
    users: UserService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            reservations: ReservationService::new(store.clone()),
            food_orders: FoodOrderService::new(store.clone()),
            users: UserService::new(store),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_food,
        handlers::list_reservations,
        handlers::save_booking,
        handlers::list_bookings,
        handlers::place_order,
        handlers::list_food_orders,
        handlers::signup,
        handlers::login,
    ),
    components(schemas(HealthRes, PlaceOrderReq, SignupReq, LoginReq, LoginRes))
)]
pub struct ApiDoc;

/// Builds the full REST router: API routes, Swagger UI and permissive CORS.
///
/// Cross-origin requests are accepted from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/food", get(handlers::list_food))
        .route("/reservations", get(handlers::list_reservations))
        .route("/save-booking", post(handlers::save_booking))
        .route("/orders", get(handlers::list_bookings))
        .route("/place-order", post(handlers::place_order))
        .route("/food-orders", get(handlers::list_food_orders))
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
