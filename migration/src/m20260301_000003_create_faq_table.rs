use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_auto(Faq::Id))
                    .col(string(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(integer(Faq::SortOrder).default(0))
                    .col(boolean(Faq::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Faq::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faq {
    Table,
    Id,
    Question,
    Answer,
    SortOrder,
    Active,
    CreatedAt,
}
