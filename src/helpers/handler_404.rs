use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use crate::models::api_error::ApiError;

pub async fn page_not_found_handler(
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    ApiError::new(
        "Oops looks like you landed at the wrong endpoint",
        uri.path(),
    ).with_status(StatusCode::NOT_FOUND)
}
