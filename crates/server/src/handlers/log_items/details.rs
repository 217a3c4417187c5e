use aide::{transform::TransformOperation, OperationIo};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::DbErr;
use derive_more::{Display, Error, From};
use serde_json::Value;

use super::LogItemData;
use crate::{handlers::SharedStore, schema::example_error};

/// Errors that may occur during the log item details request handling.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum LogItemDetailsError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Stored insertion time could not be formatted.
    DatetimeFormatError(time::error::Format),

    /// Requested log item was not found.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "log item not found")]
    LogItemNotFound,
}

/// Generate OAPI documentation for the [`details`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get a single log item.")
        .response::<200, Json<LogItemData>>()
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("No log item with the provided identifier was found.")
                .example(example_error(LogItemDetailsError::LogItemNotFound))
        })
}

/// Log item details request handler.
pub(super) async fn details(
    Path(id): Path<i64>,
    State(store): State<SharedStore>,
) -> Result<Json<LogItemData>, LogItemDetailsError> {
    let model = store
        .get(id)
        .await?
        .ok_or(LogItemDetailsError::LogItemNotFound)?;

    Ok(Json(LogItemData::try_from(model)?))
}
