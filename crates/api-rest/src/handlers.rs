//! Route handlers.
//!
//! Each handler is a thin pass-through to one repository call. Failures are logged here and
//! turned into the route's plain-text (or, for `/login`, JSON) error body.

use crate::error::{status_for, text_error};
use crate::AppState;
use api_shared::{HealthRes, HealthService, LoginReq, LoginRes, PlaceOrderReq, SignupReq};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use menu_core::json::{document_to_json, json_to_bson, json_to_document};
use menu_core::MenuError;
use serde_json::Value;

type TextResult = Result<(StatusCode, &'static str), (StatusCode, &'static str)>;
type JsonListResult = Result<Json<Vec<Value>>, (StatusCode, &'static str)>;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/food",
    responses(
        (status = 200, description = "All catalog documents"),
        (status = 500, description = "Error fetching food data", body = String, content_type = "text/plain")
    )
)]
/// Lists the food catalog as stored.
#[axum::debug_handler]
pub(crate) async fn list_food(State(state): State<AppState>) -> JsonListResult {
    match state.catalog.list_food().await {
        Ok(documents) => Ok(Json(documents.iter().map(document_to_json).collect())),
        Err(e) => Err(text_error("Error fetching food", e, "Error fetching food data")),
    }
}

#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "All reservation place documents"),
        (status = 500, description = "Error fetching reservation data", body = String, content_type = "text/plain")
    )
)]
/// Lists the reservation places.
#[axum::debug_handler]
pub(crate) async fn list_reservations(State(state): State<AppState>) -> JsonListResult {
    match state.reservations.list_reservations().await {
        Ok(documents) => Ok(Json(documents.iter().map(document_to_json).collect())),
        Err(e) => Err(text_error(
            "Error fetching reservations",
            e,
            "Error fetching reservation data",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/save-booking",
    responses(
        (status = 200, description = "Booking saved", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a JSON object", body = String, content_type = "text/plain"),
        (status = 500, description = "Booking failed", body = String, content_type = "text/plain")
    )
)]
/// Saves a table booking. Any JSON object is accepted and stored as is.
#[axum::debug_handler]
pub(crate) async fn save_booking(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> TextResult {
    let booking = match json_to_document(&body) {
        Ok(booking) => booking,
        Err(e) => return Err(text_error("Booking save failed", e, "Booking failed")),
    };

    match state.reservations.save_booking(booking).await {
        Ok(_) => Ok((StatusCode::OK, "Booking saved")),
        Err(e) => Err(text_error("Booking save failed", e, "Booking failed")),
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All saved bookings"),
        (status = 500, description = "Error fetching reservation data", body = String, content_type = "text/plain")
    )
)]
/// Lists saved table bookings.
#[axum::debug_handler]
pub(crate) async fn list_bookings(State(state): State<AppState>) -> JsonListResult {
    match state.reservations.list_bookings().await {
        Ok(documents) => Ok(Json(documents.iter().map(document_to_json).collect())),
        Err(e) => Err(text_error(
            "Error fetching reservation orders",
            e,
            "Error fetching reservation data",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/place-order",
    request_body = PlaceOrderReq,
    responses(
        (status = 200, description = "Order placed", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or malformed line items", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    )
)]
/// Places a food order for `username`, stamped with the current time.
#[axum::debug_handler]
pub(crate) async fn place_order(
    State(state): State<AppState>,
    Json(req): Json<PlaceOrderReq>,
) -> TextResult {
    let items = match req.orders.as_ref().map(json_to_bson).transpose() {
        Ok(items) => items,
        Err(e) => return Err(text_error("Food order error", e, "Internal Server Error")),
    };

    match state
        .food_orders
        .place_order(req.username, items, Utc::now())
        .await
    {
        Ok(_) => Ok((StatusCode::OK, "Order placed successfully!")),
        Err(e) => Err(text_error("Food order error", e, "Internal Server Error")),
    }
}

#[utoipa::path(
    get,
    path = "/food-orders",
    responses(
        (status = 200, description = "All food orders, each with a computed totalPrice"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    )
)]
/// Lists every food order with its total priced against the current catalog.
#[axum::debug_handler]
pub(crate) async fn list_food_orders(State(state): State<AppState>) -> JsonListResult {
    match state.food_orders.list_food_orders_with_totals().await {
        Ok(orders) => Ok(Json(orders.iter().map(|order| order.to_json()).collect())),
        Err(e) => Err(text_error(
            "Fetch food orders error",
            e,
            "Internal Server Error",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupReq,
    responses(
        (status = 200, description = "User registered", body = String, content_type = "text/plain"),
        (status = 409, description = "Email already registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    )
)]
/// Registers a new user account.
#[axum::debug_handler]
pub(crate) async fn signup(State(state): State<AppState>, Json(req): Json<SignupReq>) -> TextResult {
    match state
        .users
        .signup(&req.name, &req.email, &req.password)
        .await
    {
        Ok(()) => Ok((StatusCode::OK, "User registered successfully.")),
        Err(e) => Err(text_error("Signup error", e, "Internal Server Error")),
    }
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginRes),
        (status = 400, description = "Body is not a JSON object", body = LoginRes),
        (status = 401, description = "Invalid email or password", body = LoginRes),
        (status = 500, description = "Internal server error", body = LoginRes)
    )
)]
/// Checks a user's credentials.
///
/// Failures always answer with the same message, whether the email or the password was wrong
/// or missing. Every response, including an unreadable body, is a [`LoginRes`].
#[axum::debug_handler]
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginReq>, JsonRejection>,
) -> Result<Json<LoginRes>, (StatusCode, Json<LoginRes>)> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Login request rejected: {}", rejection.body_text());
            return Err((
                rejection.status(),
                Json(LoginRes::failure("Invalid request body")),
            ));
        }
    };
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(LoginRes::failure("Invalid email or password")),
        ));
    };

    match state.users.login(&email, &password).await {
        Ok(username) => Ok(Json(LoginRes::success(username))),
        Err(MenuError::Unauthorized) => Err((
            StatusCode::UNAUTHORIZED,
            Json(LoginRes::failure("Invalid email or password")),
        )),
        Err(e) => {
            tracing::error!("Login error: {:?}", e);
            Err((
                status_for(&e),
                Json(LoginRes::failure("Internal Server Error")),
            ))
        }
    }
}
