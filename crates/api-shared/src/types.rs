//! JSON request and response bodies.
//!
//! Document-shaped responses (catalog entries, reservations, bookings, orders) are passed
//! through as JSON objects and have no dedicated type here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /place-order`.
///
/// `orders` is the list of `{name, quantity}` line items; it is checked by the order service,
/// not here, so a missing or malformed list yields a domain error rather than a rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderReq {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub orders: Option<serde_json::Value>,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupReq {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`.
///
/// Both fields are optional at the wire level so that a partial body is answered with the
/// usual JSON failure instead of an extractor rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response of `POST /login`, both on success and on failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginRes {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginRes {
    pub fn success(username: impl Into<String>) -> Self {
        Self {
            success: true,
            username: Some(username.into()),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            username: None,
            message: Some(message.into()),
        }
    }
}
