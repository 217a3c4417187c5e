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
use tracing::info;

use super::{into_data_list, LogItemData};
use crate::{handlers::SharedStore, schema::example_error};

/// Errors that may occur during the log item deletion.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum LogItemDeletionError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Stored insertion time could not be formatted.
    DatetimeFormatError(time::error::Format),

    /// Requested log item was not found.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "log item not found")]
    LogItemNotFound,
}

/// Generate OAPI documentation for the [`delete`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete a log item.")
        .response_with::<200, Json<Vec<LogItemData>>, _>(|op| {
            op.description("List of remaining log items.")
        })
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("No log item with the provided identifier was found.")
                .example(example_error(LogItemDeletionError::LogItemNotFound))
        })
}

/// Log item deletion handler.
pub(super) async fn delete(
    Path(id): Path<i64>,
    State(store): State<SharedStore>,
) -> Result<Json<Vec<LogItemData>>, LogItemDeletionError> {
    info!(id, "deleting log item");

    if store.delete(id).await? == 0 {
        return Err(LogItemDeletionError::LogItemNotFound);
    }

    let models = store.list().await?;

    Ok(Json(into_data_list(models)?))
}
