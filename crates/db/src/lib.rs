pub mod log_item;
pub mod store;

use async_trait::async_trait;
pub use sea_orm::{
    sea_query, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryTrait,
    StatementBuilder,
};
pub use store::{DatabaseStore, InsertResult, LogItemStore};
pub use time::{OffsetDateTime, PrimitiveDateTime};

#[async_trait]
pub trait SelectExt {
    /// Check if at least one record that satisfies a query.
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr>;
}

#[async_trait]
impl<T> SelectExt for T
where
    T: QueryTrait<QueryStatement = sea_query::SelectStatement> + Send,
{
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr> {
        use sea_query::{Expr, Query};

        let mut query = self.into_query();

        // Fix failing tests with SQLite by returning at least some expr
        query.expr(1);

        let stmt = StatementBuilder::build(
            Query::select().expr(Expr::exists(query)),
            &db.get_database_backend(),
        );

        db.query_one(stmt)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(String::from("exists query returned no rows")))?
            .try_get_by_index(0)
    }
}
