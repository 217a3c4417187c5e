use aide::{transform::TransformOperation, OperationIo};
use axum::{extract::State, http::StatusCode, Json};
use axum_derive_error::ErrorResponse;
use db::DbErr;
use derive_more::{Display, Error, From};
use serde_json::Value;
use tracing::error;

use crate::{handlers::SharedStore, schema::example_error};

/// Errors that may occur during the readiness check.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum ReadinessError {
    /// Log item store is unreachable.
    #[status(StatusCode::SERVICE_UNAVAILABLE)]
    #[display(fmt = "log item store is unavailable")]
    StoreUnavailable(DbErr),
}

/// Generate OAPI documentation for the [`readiness`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Readiness probe.")
        .description("Server is ready once the log item store responds to queries.")
        .response::<200, Json<&'static str>>()
        .response_with::<503, Json<Value>, _>(|op| {
            op.description("Log item store is unreachable.")
                .example(example_error(ReadinessError::StoreUnavailable(
                    DbErr::Custom(String::from("connection refused")),
                )))
        })
}

/// Readiness probe handler.
pub(super) async fn readiness(
    State(store): State<SharedStore>,
) -> Result<Json<&'static str>, ReadinessError> {
    store.ping().await.map_err(|err| {
        error!(%err, "log item store is unavailable");
        ReadinessError::StoreUnavailable(err)
    })?;

    Ok(Json("ready"))
}
