/// Log item creation route.
mod create;

/// Log item deletion route.
mod delete;

/// Single log item details route.
mod details;

/// Log item list route.
mod list;

/// Log item replacement route.
mod update;

use aide::axum::{routing::get_with, ApiRouter};
use db::log_item::{self, NewLogItem};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::{error::Format, macros::format_description};

use super::SharedStore;

/// Create an [`ApiRouter`] that provides an API server with log item routes.
pub(crate) fn routes() -> ApiRouter<SharedStore> {
    ApiRouter::new()
        .api_route(
            "/v1.0/logitem",
            get_with(list::list, list::docs).post_with(create::create, create::docs),
        )
        .api_route(
            "/v1.0/logitem/:id",
            get_with(details::details, details::docs)
                .post_with(update::update, update::docs)
                .delete_with(delete::delete, delete::docs),
        )
        .with_path_items(|op| op.tag("Log items"))
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A single log item, as returned to API clients.
#[derive(Serialize, JsonSchema)]
pub(crate) struct LogItemData {
    /// Log item identifier.
    #[serde(skip_serializing_if = "is_zero")]
    #[schemars(example = "crate::schema::example_database_identifier")]
    pub id: i64,

    /// Result code of a reported CLI command.
    #[schemars(example = "crate::schema::example_result_code")]
    pub result_code: i64,

    /// Identifier of a reporting machine.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[schemars(example = "crate::schema::example_machine_id")]
    pub machine_id: String,

    /// Free-form information.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[schemars(example = "crate::schema::example_info")]
    pub info: String,

    /// Client wall-clock time of the reported event.
    #[serde(skip_serializing_if = "is_zero")]
    #[schemars(example = "crate::schema::example_client_timestamp")]
    pub client_timestamp: i64,

    /// Time at which the log item was stored, in UTC.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[schemars(example = "crate::schema::example_inserted_datetime")]
    pub inserted_datetime: String,
}

impl TryFrom<log_item::Model> for LogItemData {
    type Error = Format;

    fn try_from(model: log_item::Model) -> Result<Self, Self::Error> {
        let inserted_datetime = model
            .inserted_datetime
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))?;

        Ok(Self {
            id: model.id,
            result_code: model.result_code,
            machine_id: model.machine_id,
            info: model.info,
            client_timestamp: model.client_timestamp,
            inserted_datetime,
        })
    }
}

/// Convert a list of stored log items into their API representation.
fn into_data_list(models: Vec<log_item::Model>) -> Result<Vec<LogItemData>, Format> {
    models.into_iter().map(LogItemData::try_from).collect()
}

/// Log item submitted by an API client.
///
/// Any omitted optional field is stored with an empty value,
/// since stored log items are always replaced as a whole.
#[derive(Deserialize, JsonSchema)]
pub(crate) struct LogItemRequest {
    /// Log item identifier.
    ///
    /// If omitted or zero, a new identifier is assigned.
    #[serde(default)]
    #[schemars(example = "crate::schema::example_database_identifier")]
    pub id: Option<i64>,

    /// Result code of a reported CLI command.
    #[schemars(example = "crate::schema::example_result_code")]
    pub result_code: i64,

    /// Identifier of a reporting machine.
    #[serde(default)]
    #[schemars(example = "crate::schema::example_machine_id")]
    pub machine_id: Option<String>,

    /// Free-form information.
    #[serde(default)]
    #[schemars(example = "crate::schema::example_info")]
    pub info: Option<String>,

    /// Client wall-clock time of the reported event.
    #[serde(default)]
    #[schemars(example = "crate::schema::example_client_timestamp")]
    pub client_timestamp: Option<i64>,
}

impl From<LogItemRequest> for NewLogItem {
    fn from(request: LogItemRequest) -> Self {
        Self {
            id: request.id.unwrap_or_default(),
            result_code: request.result_code,
            machine_id: request.machine_id.unwrap_or_default(),
            info: request.info.unwrap_or_default(),
            client_timestamp: request.client_timestamp.unwrap_or_default(),
        }
    }
}
