use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageView::Table)
                    .if_not_exists()
                    .col(pk_auto(PageView::Id))
                    .col(string(PageView::Path))
                    .col(string_null(PageView::Referrer))
                    .col(
                        timestamp_with_time_zone(PageView::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Analytics and retention both scan by time
        manager
            .create_index(
                Index::create()
                    .name("idx_page_view_created_at")
                    .table(PageView::Table)
                    .col(PageView::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageView::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageView {
    Table,
    Id,
    Path,
    Referrer,
    CreatedAt,
}
