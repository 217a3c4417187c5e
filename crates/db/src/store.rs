//! Durable log item storage.
//!
//! [`LogItemStore`] is the only way API handlers interact with log items,
//! which allows replacing the database-backed [`DatabaseStore`] with
//! an alternative implementation when needed.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, QuerySelect, QueryTrait,
};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{
    log_item::{self, NewLogItem},
    SelectExt,
};

/// Outcome of a single [`LogItemStore::insert`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertResult {
    /// Count of rows affected by the write.
    ///
    /// Any value other than `1` indicates a storage-level failure.
    pub rows_affected: u64,

    /// Store-assigned or caller-provided log item identifier.
    pub id: i64,
}

/// Log item persistence operations.
#[async_trait]
pub trait LogItemStore: Send + Sync {
    /// Insert a new log item, or replace an existing one with the same identifier.
    ///
    /// If `item.id` is zero, a new identifier is assigned by the store.
    /// Otherwise, every field of a row with the same identifier is overwritten,
    /// no partial updates are performed.
    async fn insert(&self, item: NewLogItem) -> Result<InsertResult, DbErr>;

    /// Find a single log item by its identifier.
    async fn get(&self, id: i64) -> Result<Option<log_item::Model>, DbErr>;

    /// Get all stored log items ordered by their insertion time.
    ///
    /// No pagination is performed, the whole table is returned at once.
    async fn list(&self) -> Result<Vec<log_item::Model>, DbErr>;

    /// Delete a log item by its identifier, returning the count of removed rows.
    async fn delete(&self, id: i64) -> Result<u64, DbErr>;

    /// Check that the underlying storage is reachable.
    async fn ping(&self) -> Result<(), DbErr>;
}

/// [`LogItemStore`] implementation backed by a relational database.
pub struct DatabaseStore {
    connection: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Underlying database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

fn current_datetime() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();

    PrimitiveDateTime::new(now.date(), now.time())
}

#[async_trait]
impl LogItemStore for DatabaseStore {
    async fn insert(&self, item: NewLogItem) -> Result<InsertResult, DbErr> {
        let mut model = log_item::ActiveModel {
            client_timestamp: ActiveValue::Set(item.client_timestamp),
            result_code: ActiveValue::Set(item.result_code),
            machine_id: ActiveValue::Set(item.machine_id),
            info: ActiveValue::Set(item.info),
            inserted_datetime: ActiveValue::Set(current_datetime()),
            ..Default::default()
        };

        let query = if item.id == 0 {
            log_item::Entity::insert(model)
        } else {
            model.id = ActiveValue::Set(item.id);

            log_item::Entity::insert(model).on_conflict(
                OnConflict::column(log_item::Column::Id)
                    .update_columns([
                        log_item::Column::ClientTimestamp,
                        log_item::Column::ResultCode,
                        log_item::Column::MachineId,
                        log_item::Column::Info,
                        log_item::Column::InsertedDatetime,
                    ])
                    .to_owned(),
            )
        };

        let result = self
            .connection
            .execute(query.build(self.connection.get_database_backend()))
            .await?;

        let id = if item.id == 0 {
            result.last_insert_id() as i64
        } else {
            item.id
        };

        Ok(InsertResult {
            rows_affected: result.rows_affected(),
            id,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<log_item::Model>, DbErr> {
        log_item::Entity::find_by_id(id).one(&self.connection).await
    }

    async fn list(&self) -> Result<Vec<log_item::Model>, DbErr> {
        log_item::Entity::find()
            .order_by_asc(log_item::Column::InsertedDatetime)
            .order_by_asc(log_item::Column::Id)
            .all(&self.connection)
            .await
    }

    async fn delete(&self, id: i64) -> Result<u64, DbErr> {
        log_item::Entity::delete_by_id(id)
            .exec(&self.connection)
            .await
            .map(|result| result.rows_affected)
    }

    async fn ping(&self) -> Result<(), DbErr> {
        log_item::Entity::find()
            .select_only()
            .exists(&self.connection)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Database, Schema};

    use super::{DatabaseStore, InsertResult, LogItemStore};
    use crate::log_item::{self, NewLogItem};

    async fn create_store() -> DatabaseStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("unable to create test database");

        let builder = db.get_database_backend();
        let table = Schema::new(builder).create_table_from_entity(log_item::Entity);

        db.execute(builder.build(&table))
            .await
            .expect("unable to create logs table");

        DatabaseStore::new(db)
    }

    fn new_item(result_code: i64, machine_id: &str, info: &str) -> NewLogItem {
        NewLogItem {
            result_code,
            machine_id: String::from(machine_id),
            info: String::from(info),
            client_timestamp: 1672531200,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store = create_store().await;

        let result = store
            .insert(new_item(0, "m1", "start"))
            .await
            .expect("unable to insert log item");

        assert_eq!(
            result,
            InsertResult {
                rows_affected: 1,
                id: 1
            }
        );

        let model = store
            .get(result.id)
            .await
            .expect("unable to get log item")
            .expect("log item is missing");

        assert_eq!(model.id, 1);
        assert_eq!(model.result_code, 0);
        assert_eq!(model.machine_id, "m1");
        assert_eq!(model.info, "start");
        assert_eq!(model.client_timestamp, 1672531200);
    }

    #[tokio::test]
    async fn get_unknown() {
        let store = create_store().await;

        assert_eq!(store.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_replaces_whole_row() {
        let store = create_store().await;

        store
            .insert(NewLogItem {
                id: 7,
                ..new_item(1, "m1", "first")
            })
            .await
            .unwrap();

        let first = store.get(7).await.unwrap().unwrap();

        let result = store
            .insert(NewLogItem {
                id: 7,
                result_code: 2,
                info: String::from("second"),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            InsertResult {
                rows_affected: 1,
                id: 7
            }
        );

        let second = store.get(7).await.unwrap().unwrap();

        assert_eq!(second.result_code, 2);
        assert_eq!(second.info, "second");
        assert_eq!(second.machine_id, "");
        assert_eq!(second.client_timestamp, 0);
        assert!(second.inserted_datetime >= first.inserted_datetime);

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_absent_id() {
        let store = create_store().await;

        let result = store
            .insert(NewLogItem {
                id: 5,
                ..new_item(2, "", "x")
            })
            .await
            .unwrap();

        assert_eq!(result.id, 5);
        assert_eq!(store.get(5).await.unwrap().unwrap().info, "x");
    }

    #[tokio::test]
    async fn list_order() {
        let store = create_store().await;

        for code in 0..5 {
            store.insert(new_item(code, "m1", "")).await.unwrap();
        }

        // Replacing an older item moves it to the end of the list.
        store
            .insert(NewLogItem {
                id: 2,
                ..new_item(10, "m2", "")
            })
            .await
            .unwrap();

        let items = store.list().await.unwrap();

        assert_eq!(items.len(), 5);
        assert!(items
            .windows(2)
            .all(|pair| pair[0].inserted_datetime <= pair[1].inserted_datetime));
        assert_eq!(items.last().map(|item| item.id), Some(2));
    }

    #[tokio::test]
    async fn delete() {
        let store = create_store().await;

        let id = store.insert(new_item(0, "m1", "")).await.unwrap().id;
        store.insert(new_item(1, "m1", "")).await.unwrap();

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.get(id).await.unwrap(), None);

        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn identifiers_are_not_reused() {
        let store = create_store().await;

        store.insert(new_item(0, "m1", "")).await.unwrap();
        let id = store.insert(new_item(0, "m1", "")).await.unwrap().id;

        store.delete(id).await.unwrap();

        let next = store.insert(new_item(0, "m1", "")).await.unwrap().id;

        assert!(next > id);
    }

    #[tokio::test]
    async fn ping() {
        let store = create_store().await;

        store.ping().await.expect("store is unreachable");
    }
}
