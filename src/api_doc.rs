use utoipa::OpenApi;

use crate::error::{HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::StatusResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-local-store API",
        version = "1.0.0",
        description = "A single-document JSON store served over HTTP, backed by a file on disk"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_handler,
        handlers::post::post_handler,
        handlers::options::options_handler
    ),
    components(
        schemas(
            StatusResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "storage", description = "Stored document operations")
    )
)]
pub struct ApiDoc;
