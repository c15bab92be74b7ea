use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .if_not_exists()
                    .col(pk_auto(Quote::Id))
                    .col(string(Quote::Name))
                    .col(string(Quote::Email))
                    .col(string_null(Quote::Phone))
                    .col(integer_null(Quote::ProductId))
                    .col(text(Quote::Message))
                    .col(big_integer_null(Quote::BudgetCents))
                    .col(string(Quote::Status).default("new"))
                    .col(
                        timestamp_with_time_zone(Quote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quote {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ProductId,
    Message,
    BudgetCents,
    Status,
    CreatedAt,
}
