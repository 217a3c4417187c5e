use aide::{transform::TransformOperation, OperationIo};
use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::DbErr;
use derive_more::{Display, Error, From};

use super::{into_data_list, LogItemData};
use crate::handlers::SharedStore;

/// Errors that may occur during the log item list request handling.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum LogItemListError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Stored insertion time could not be formatted.
    DatetimeFormatError(time::error::Format),
}

/// Generate OAPI documentation for the [`list`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get all log items.")
        .description(
            r#"Log items are ordered by their insertion time. This route does not support
pagination, every stored log item is returned at once."#,
        )
        .response::<200, Json<Vec<LogItemData>>>()
}

/// Log item list request handler.
pub(super) async fn list(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<LogItemData>>, LogItemListError> {
    let models = store.list().await?;

    Ok(Json(into_data_list(models)?))
}
