use aide::transform::TransformOperation;
use axum::Json;

/// Generate OAPI documentation for the [`liveness`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Liveness probe.")
        .response::<200, Json<&'static str>>()
}

/// Liveness probe handler.
pub(super) async fn liveness() -> Json<&'static str> {
    Json("alive")
}
