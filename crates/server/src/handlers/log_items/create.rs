use aide::{transform::TransformOperation, OperationIo};
use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::DbErr;
use derive_more::{Display, Error, From};
use serde_json::Value;
use tracing::error;

use super::{LogItemData, LogItemRequest};
use crate::{extract::DecodedJson, handlers::SharedStore, schema::example_error};

/// Errors that may occur during the log item creation.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum LogItemCreateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Stored insertion time could not be formatted.
    DatetimeFormatError(time::error::Format),

    /// Write did not affect exactly one row.
    #[display(fmt = "unexpected count of affected rows")]
    UnexpectedRowCount,

    /// Log item was not found right after being written.
    #[display(fmt = "stored log item is missing")]
    LogItemMissing,
}

/// Generate OAPI documentation for the [`create`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create new log item.")
        .description(
            r#"An identifier is assigned automatically when omitted from the request body.
If a non-zero identifier is provided, any existing log item with the same identifier
is replaced as a whole."#,
        )
        .response::<200, Json<LogItemData>>()
        .response_with::<400, Json<Value>, _>(|op| {
            op.description("Request body could not be decoded.")
        })
        .response_with::<500, Json<Value>, _>(|op| {
            op.description("Log item could not be stored.")
                .example(example_error(LogItemCreateError::UnexpectedRowCount))
        })
}

/// Log item creation handler.
///
/// The stored log item is read back to report the assigned
/// identifier and insertion time.
pub(super) async fn create(
    State(store): State<SharedStore>,
    DecodedJson(request): DecodedJson<LogItemRequest>,
) -> Result<Json<LogItemData>, LogItemCreateError> {
    let result = store.insert(request.into()).await?;

    if result.rows_affected != 1 {
        error!(
            rows_affected = result.rows_affected,
            "unexpected count of affected rows during log item creation"
        );
        return Err(LogItemCreateError::UnexpectedRowCount);
    }

    let model = store
        .get(result.id)
        .await?
        .ok_or(LogItemCreateError::LogItemMissing)?;

    Ok(Json(LogItemData::try_from(model)?))
}
