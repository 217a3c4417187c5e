use std::sync::Arc;

use aide::{
    axum::{routing::get, ApiRouter},
    openapi::OpenApi,
    redoc::Redoc,
};
use axum::{response::IntoResponse, Extension, Json};

use super::SharedStore;

/// Create an [`ApiRouter`] that provides an API server with documentation routes.
pub(crate) fn routes() -> ApiRouter<SharedStore> {
    ApiRouter::new()
        .route("/docs", Redoc::new("/docs/api.json").axum_route())
        .route(
            "/docs/api.json",
            get(|Extension(oapi): Extension<Arc<OpenApi>>| async move {
                Json(&*oapi).into_response()
            }),
        )
}
