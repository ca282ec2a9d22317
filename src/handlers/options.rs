use crate::routes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// OPTIONS /api/storage handler - CORS preflight
///
/// Empty 200 declaring the allowed methods and headers. The
/// `Access-Control-Allow-Origin` header comes from the layer wrapping the
/// storage route, same as for GET and POST.
#[utoipa::path(
    options,
    path = routes::STORAGE,
    responses(
        (status = 200, description = "Preflight accepted, no body")
    ),
    tag = "storage"
)]
pub async fn options_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use crate::startup::tests::setup_test_app;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_options_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let app = setup_test_app(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/storage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
                .unwrap(),
            "Content-Type"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty(), "Preflight response carries no body");
    }
}
