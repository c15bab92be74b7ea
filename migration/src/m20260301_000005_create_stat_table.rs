use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stat::Table)
                    .if_not_exists()
                    .col(pk_auto(Stat::Id))
                    .col(string(Stat::Label))
                    .col(string(Stat::Value))
                    .col(integer(Stat::SortOrder).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stat {
    Table,
    Id,
    Label,
    Value,
    SortOrder,
}
