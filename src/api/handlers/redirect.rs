//! Handler for the short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Cache lookup (hit → immediate redirect)
/// 2. On miss, database lookup with expiration check
/// 3. Cache population for the next request
/// 4. Click event handed to the background worker (fire-and-forget)
///
/// Uses 307 Temporary Redirect so clients keep re-resolving and clicks keep
/// being counted.
///
/// # Errors
///
/// - **404 Not Found** - the code doesn't exist
/// - **410 Gone** - the link existed but is past its expiry
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.redirect_service.resolve(&code).await?;

    Ok(Redirect::temporary(&long_url))
}
