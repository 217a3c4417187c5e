/// Liveness probe route.
mod liveness;

/// Readiness probe route.
mod readiness;

use aide::axum::{routing::get_with, ApiRouter};

use super::SharedStore;

/// Create an [`ApiRouter`] that provides an API server with probe routes.
pub(crate) fn routes() -> ApiRouter<SharedStore> {
    ApiRouter::new()
        .api_route("/readiness", get_with(readiness::readiness, readiness::docs))
        .api_route("/healthz", get_with(liveness::liveness, liveness::docs))
        .with_path_items(|op| op.tag("Health probes"))
}
