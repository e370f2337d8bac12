use crate::model::{Download, Faq, Feature, Stats, SystemRequirement, Testimonial};
use crate::{Content, ContentError, ContentStore};
use axum::Json;
use axum::extract::State;
use gnomix_derive::api_handler;
use gnomix_domain::constants::{CONTENT_TAG, STATS_TAG};
use gnomix_kernel::server::{ApiError, ApiState, ErrorBody};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const STATS_FAILED: &str = "Failed to fetch stats";
const TRACK_FAILED: &str = "Failed to track download";
const DOWNLOADS_FAILED: &str = "Failed to fetch downloads";
const LATEST_FAILED: &str = "Failed to fetch latest download";
const NO_DOWNLOADS: &str = "No downloads available";
const FAQS_FAILED: &str = "Failed to fetch FAQs";
const FEATURES_FAILED: &str = "Failed to fetch features";
const TESTIMONIALS_FAILED: &str = "Failed to fetch testimonials";
const REQUIREMENTS_FAILED: &str = "Failed to fetch system requirements";

/// Content routes, relative to the API prefix.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(get_stats))
        .routes(routes!(track_download))
        .routes(routes!(list_downloads))
        .routes(routes!(latest_download))
        .routes(routes!(list_faqs))
        .routes(routes!(list_features))
        .routes(routes!(list_testimonials))
        .routes(routes!(list_system_requirements))
}

/// Runs one store call. Any fault, including a missing content slice, is logged and
/// reported to the client as a 500 carrying `failure`.
fn with_store<T>(
    state: &ApiState,
    failure: &'static str,
    call: impl FnOnce(&dyn ContentStore) -> Result<T, ContentError>,
) -> Result<T, ApiError> {
    let content = state.try_get_slice::<Content>().map_err(|e| {
        error!(error = %e, "{failure}");
        ApiError::internal(failure)
    })?;

    call(content.store.as_ref()).map_err(|e| {
        error!(error = %e, "{failure}");
        ApiError::internal(failure)
    })
}

#[api_handler(
    get,
    path = "/stats",
    responses(
        (status = OK, description = "Current counters", body = Stats),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = STATS_TAG,
)]
pub(crate) async fn get_stats(State(state): State<ApiState>) -> Result<Json<Stats>, ApiError> {
    with_store(&state, STATS_FAILED, |store| store.stats()).map(Json)
}

#[api_handler(
    post,
    path = "/stats/download",
    responses(
        (status = OK, description = "Counters after recording one download", body = Stats),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = STATS_TAG,
)]
pub(crate) async fn track_download(
    State(state): State<ApiState>,
) -> Result<Json<Stats>, ApiError> {
    let stats = with_store(&state, TRACK_FAILED, |store| store.increment_downloads())?;
    tracing::debug!(downloads = stats.downloads, "Download tracked");
    Ok(Json(stats))
}

#[api_handler(
    get,
    path = "/downloads",
    responses(
        (status = OK, description = "All releases, newest first", body = Vec<Download>),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn list_downloads(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Download>>, ApiError> {
    with_store(&state, DOWNLOADS_FAILED, |store| store.downloads()).map(Json)
}

#[api_handler(
    get,
    path = "/downloads/latest",
    responses(
        (status = OK, description = "The newest release", body = Download),
        (status = NOT_FOUND, description = "No release published", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn latest_download(
    State(state): State<ApiState>,
) -> Result<Json<Download>, ApiError> {
    with_store(&state, LATEST_FAILED, |store| store.latest_download())?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NO_DOWNLOADS))
}

#[api_handler(
    get,
    path = "/faqs",
    responses(
        (status = OK, description = "Frequently asked questions", body = Vec<Faq>),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn list_faqs(State(state): State<ApiState>) -> Result<Json<Vec<Faq>>, ApiError> {
    with_store(&state, FAQS_FAILED, |store| store.faqs()).map(Json)
}

#[api_handler(
    get,
    path = "/features",
    responses(
        (status = OK, description = "Highlighted features", body = Vec<Feature>),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn list_features(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Feature>>, ApiError> {
    with_store(&state, FEATURES_FAILED, |store| store.features()).map(Json)
}

#[api_handler(
    get,
    path = "/testimonials",
    responses(
        (status = OK, description = "User testimonials", body = Vec<Testimonial>),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn list_testimonials(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    with_store(&state, TESTIMONIALS_FAILED, |store| store.testimonials()).map(Json)
}

#[api_handler(
    get,
    path = "/system-requirements",
    responses(
        (status = OK, description = "Minimum and recommended hardware", body = Vec<SystemRequirement>),
        (status = INTERNAL_SERVER_ERROR, description = "Store fault", body = ErrorBody),
    ),
    tag = CONTENT_TAG,
)]
pub(crate) async fn list_system_requirements(
    State(state): State<ApiState>,
) -> Result<Json<Vec<SystemRequirement>>, ApiError> {
    with_store(&state, REQUIREMENTS_FAILED, |store| store.system_requirements()).map(Json)
}
