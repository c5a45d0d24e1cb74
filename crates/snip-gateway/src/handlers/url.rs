use crate::error::{AppError, Result};
use crate::model::{AnalyticsResponse, ShortenQuery, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::ShortCode;
use tracing::debug;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<Json<ShortenResponse>> {
    let long_url = query.url.ok_or(AppError::MissingUrl)?;
    let code = state.store().create_mapping(&long_url)?;

    Ok(Json(ShortenResponse {
        url: state.short_link(&code),
    }))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // Anything outside the code alphabet can never have been issued.
    let code = ShortCode::new(code.as_str()).map_err(|_| AppError::UnknownShortCode(code))?;

    let long_url = state
        .store()
        .find_long(code.as_str())
        .ok_or_else(|| AppError::UnknownShortCode(code.to_string()))?;

    let location = HeaderValue::try_from(long_url)
        .map_err(|_| AppError::InvalidRedirectTarget(code.to_string()))?;

    // Best effort; counting never holds up or fails the redirect.
    state.store().record_access(code.as_str());
    debug!(code = %code, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Json<AnalyticsResponse> {
    Json(AnalyticsResponse {
        accesses: state.store().access_count(&code),
    })
}
