use axum::http::StatusCode;
use menu_core::MenuError;

/// HTTP status for a core error.
pub(crate) fn status_for(err: &MenuError) -> StatusCode {
    match err {
        MenuError::Conflict => StatusCode::CONFLICT,
        MenuError::Unauthorized => StatusCode::UNAUTHORIZED,
        MenuError::InvalidOrder(_) | MenuError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
        MenuError::StoreUnavailable(_)
        | MenuError::Password(_)
        | MenuError::CorruptRecord { .. }
        | MenuError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs `err` and converts it into a plain-text error response.
///
/// Server-side failures use the route's `fallback` message; client errors get a message
/// describing what was wrong with the request. Internal details are only logged.
pub(crate) fn text_error(
    context: &str,
    err: MenuError,
    fallback: &'static str,
) -> (StatusCode, &'static str) {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("{}: {:?}", context, err);
    } else {
        tracing::warn!("{}: {}", context, err);
    }

    let message = match err {
        MenuError::InvalidOrder(_) => "Invalid order",
        MenuError::InvalidDocument(_) => "Invalid request body",
        MenuError::Conflict => "User already exists.",
        MenuError::Unauthorized => "Invalid email or password",
        _ => fallback,
    };
    (status, message)
}
