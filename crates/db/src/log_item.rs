//! Log item reported by a remote CLI tool.
//!
//! Every log item carries the result code of a single CLI command invocation,
//! optionally accompanied by the machine identifier, free-form information
//! and the client-side timestamp of the event.
//!
//! The [`Model`]'s `inserted_datetime` field is always assigned by the store
//! at write time and is independent of the client-provided `client_timestamp`.

use sea_orm::entity::prelude::*;

/// Log item model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    /// Unique log item identifier.
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i64,

    /// Client wall-clock time at which the event occurred.
    #[sea_orm(column_name = "clientTimestamp")]
    pub client_timestamp: i64,

    /// Result code of a reported CLI command.
    #[sea_orm(column_name = "resultCode")]
    pub result_code: i64,

    /// Identifier of a machine that reported the log item.
    #[sea_orm(column_name = "machineId")]
    pub machine_id: String,

    /// Free-form information attached to the log item.
    pub info: String,

    /// Time at which the log item was written by the store.
    #[sea_orm(column_name = "insertedDatetime")]
    pub inserted_datetime: TimeDateTime,
}

/// Log item model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Log item values submitted for storage.
///
/// A zero `id` requests a store-assigned identifier, while any other value
/// replaces the whole row with the same identifier (or creates it, if absent).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewLogItem {
    pub id: i64,
    pub result_code: i64,
    pub machine_id: String,
    pub info: String,
    pub client_timestamp: i64,
}
