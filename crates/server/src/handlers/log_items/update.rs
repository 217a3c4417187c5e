use aide::{transform::TransformOperation, OperationIo};
use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{log_item::NewLogItem, DbErr};
use derive_more::{Display, Error, From};
use serde_json::Value;
use tracing::error;

use super::{into_data_list, LogItemData, LogItemRequest};
use crate::{extract::DecodedJson, handlers::SharedStore};

/// Errors that may occur during the log item replacement.
#[derive(ErrorResponse, Display, From, Error, OperationIo)]
#[aide(output)]
pub(super) enum LogItemUpdateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Stored insertion time could not be formatted.
    DatetimeFormatError(time::error::Format),

    /// Write did not affect exactly one row.
    #[display(fmt = "unexpected count of affected rows")]
    UnexpectedRowCount,
}

/// Generate OAPI documentation for the [`update`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Replace a log item.")
        .description(
            r#"The stored log item is replaced as a whole, no partial updates are performed:
any field omitted from the request body is stored empty. If no log item with
the provided identifier exists, a new one is created. Identifier from the path
takes precedence over the one in the request body."#,
        )
        .response_with::<200, Json<Vec<LogItemData>>, _>(|op| {
            op.description("List of all stored log items.")
        })
        .response_with::<400, Json<Value>, _>(|op| {
            op.description("Request body could not be decoded.")
        })
}

/// Log item replacement handler.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(store): State<SharedStore>,
    DecodedJson(request): DecodedJson<LogItemRequest>,
) -> Result<Json<Vec<LogItemData>>, LogItemUpdateError> {
    let result = store
        .insert(NewLogItem {
            id,
            ..request.into()
        })
        .await?;

    if result.rows_affected != 1 {
        error!(
            id,
            rows_affected = result.rows_affected,
            "unexpected count of affected rows during log item replacement"
        );
        return Err(LogItemUpdateError::UnexpectedRowCount);
    }

    let models = store.list().await?;

    Ok(Json(into_data_list(models)?))
}
