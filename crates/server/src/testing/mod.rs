use std::{error::Error, sync::Arc};

use axum::async_trait;
use db::{
    log_item::{self, NewLogItem},
    Database, DatabaseStore, DbErr, InsertResult, LogItemStore,
};
use hyper::body::{self, Bytes, HttpBody};
use migration::MigratorTrait;
use serde::Serialize;

pub(crate) async fn create_store() -> Arc<dyn LogItemStore> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("unable to create test database");

    migration::Migrator::up(&db, None)
        .await
        .expect("unable to run migrations");

    Arc::new(DatabaseStore::new(db))
}

/// Store that accepts writes without persisting anything.
pub(crate) struct LossyStore;

#[async_trait]
impl LogItemStore for LossyStore {
    async fn insert(&self, item: NewLogItem) -> Result<InsertResult, DbErr> {
        Ok(InsertResult {
            rows_affected: 0,
            id: item.id,
        })
    }

    async fn get(&self, _: i64) -> Result<Option<log_item::Model>, DbErr> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<log_item::Model>, DbErr> {
        Ok(Vec::new())
    }

    async fn delete(&self, _: i64) -> Result<u64, DbErr> {
        Ok(0)
    }

    async fn ping(&self) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("store is offline")))
    }
}

pub(crate) trait RequestBodyExt: Sized {
    fn from_json<B: Serialize>(val: B) -> Self;
}

impl<T> RequestBodyExt for T
where
    T: HttpBody + From<Vec<u8>>,
{
    fn from_json<B: Serialize>(val: B) -> Self {
        T::from(serde_json::to_vec(&val).expect("unable to serialize"))
    }
}

#[async_trait(?Send)]
pub(crate) trait ResponseBodyExt {
    async fn bytes(self) -> Bytes;

    async fn text(self) -> String;

    async fn json(self) -> serde_json::Value;
}

#[async_trait(?Send)]
impl<T> ResponseBodyExt for T
where
    T: HttpBody,
    T::Error: Error,
{
    async fn bytes(self) -> Bytes {
        body::to_bytes(self)
            .await
            .expect("unable to convert to bytes")
    }

    async fn text(self) -> String {
        String::from_utf8(self.bytes().await.to_vec()).expect("unable to convert to text")
    }

    async fn json(self) -> serde_json::Value {
        serde_json::from_slice(&self.bytes().await).expect("unable to convert to json")
    }
}
