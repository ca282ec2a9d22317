use crate::error::ApiError;
use crate::models::StatusResponse;
use crate::routes;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

/// POST /api/storage handler - Replace the stored document
///
/// The body is read raw and parsed here rather than through the `Json`
/// extractor: a malformed body must answer 500 with the parser's message,
/// not axum's 400/415 rejection. On success the backing file is fully
/// overwritten; there are no merge semantics.
#[utoipa::path(
    post,
    path = routes::STORAGE,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Document stored successfully", body = StatusResponse),
        (status = 500, description = "Invalid JSON body or write failure, plain text message", body = String)
    ),
    tag = "storage"
)]
pub async fn post_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let data: JsonValue = serde_json::from_slice(&body)?;

    state.store.save(&data).await?;

    tracing::info!("Successfully stored document ({} bytes received)", body.len());
    Ok((StatusCode::OK, Json(StatusResponse::success())))
}
