use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscountCode::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscountCode::Id))
                    .col(string_uniq(DiscountCode::Code))
                    .col(small_integer(DiscountCode::PercentOff))
                    .col(boolean(DiscountCode::Active).default(true))
                    .col(timestamp_with_time_zone_null(DiscountCode::ExpiresAt))
                    .col(integer_null(DiscountCode::MaxUses))
                    .col(integer(DiscountCode::TimesUsed).default(0))
                    .col(
                        timestamp_with_time_zone(DiscountCode::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscountCode {
    Table,
    Id,
    Code,
    PercentOff,
    Active,
    ExpiresAt,
    MaxUses,
    TimesUsed,
    CreatedAt,
}
