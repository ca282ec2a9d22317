use crate::api_doc::ApiDoc;
use crate::handlers::{get_handler, health_handler, options_handler, post_handler};
use crate::routes;
use crate::state::AppState;
use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router(state: AppState) -> Router {
    // The storage resource is wide open to cross-origin callers. Setting the
    // header in a layer keeps it on every response through this route,
    // including handler errors.
    let storage = Router::new()
        .route(
            routes::STORAGE,
            get(get_handler).post(post_handler).options(options_handler),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .merge(storage)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Everything else is a plain file lookup under the static root,
        // with index.html resolution on directories
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
