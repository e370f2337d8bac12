use axum::Router;
use gnomix::domain::constants::{API_PREFIX, DOCS_PATH};
use gnomix::kernel::prelude::ApiState;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(
    title = "Gnomix API",
    description = "Content and download statistics for the Gnomix website"
))]
struct ApiDoc;

/// Assembles the HTTP surface: system routes, the content API under [`API_PREFIX`],
/// the Scalar UI at [`DOCS_PATH`] and, when configured, the static front-end.
pub(crate) fn init(state: ApiState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(gnomix::server::router::system_router())
        .nest(API_PREFIX, gnomix::server::router::content_router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
        .split_for_parts();

    let router = Router::new().merge(openapi_routes).merge(Scalar::with_url(DOCS_PATH, api_doc));

    match static_dir {
        Some(dir) => with_static_front_end(router, &dir),
        None => router,
    }
}

/// Unmatched paths are served from `dir`; unknown files get `index.html` so the
/// client-side router can take over.
fn with_static_front_end(router: Router, dir: &Path) -> Router {
    info!(dir = %dir.display(), "Serving static front-end");
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).fallback(index))
}
