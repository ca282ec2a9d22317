use crate::routes;
use crate::state::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

/// GET /api/storage handler - Read the stored document
///
/// Answers 200 in every case: the file contents when something has been
/// stored, `{}` when the file is absent or empty, and `{}` again when the
/// read fails. Read failures are logged but masked from the client, so
/// "no data yet" and "data unreadable" are indistinguishable on the wire.
#[utoipa::path(
    get,
    path = routes::STORAGE,
    responses(
        (status = 200, description = "Stored document, or an empty object when nothing is stored", body = serde_json::Value)
    ),
    tag = "storage"
)]
pub async fn get_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.store.load().await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => b"{}".to_vec(),
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(
                error = %error,
                path = %state.store.path().display(),
                "Failed to read data file; returning empty document"
            );
            b"{}".to_vec()
        }
    };

    ([(header::CONTENT_TYPE, "application/json")], body)
}
