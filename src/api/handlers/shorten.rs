//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/a",
///   "custom_code": "my-promo",   // optional
///   "expires_in": 86400          // optional, seconds
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** - a new link was created
/// - **200 OK** with `already_existed: true` - the URL was shortened before
/// - **400 Bad Request** - malformed URL, custom code, or expiry
/// - **409 Conflict** - the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .shorten(payload.long_url, payload.custom_code, payload.expires_in)
        .await?;

    let status = if outcome.already_existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    let response = ShortenResponse {
        short_url: state.short_url(&outcome.link.short_code),
        short_code: outcome.link.short_code,
        long_url: outcome.link.long_url,
        expires_at: outcome.link.expires_at,
        created_at: outcome.link.created_at,
        already_existed: outcome.already_existed,
    };

    Ok((status, Json(response)))
}
