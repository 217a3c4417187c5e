use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Logs::ClientTimestamp)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Logs::ResultCode).big_integer().not_null())
                    .col(
                        ColumnDef::new(Logs::MachineId)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Logs::Info).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Logs::InsertedDatetime)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_inserted_datetime")
                    .table(Logs::Table)
                    .col(Logs::InsertedDatetime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Logs {
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "clientTimestamp"]
    ClientTimestamp,
    #[iden = "resultCode"]
    ResultCode,
    #[iden = "machineId"]
    MachineId,
    Info,
    #[iden = "insertedDatetime"]
    InsertedDatetime,
}
