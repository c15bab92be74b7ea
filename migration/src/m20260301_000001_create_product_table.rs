use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_uniq(Product::Slug))
                    .col(string(Product::Name))
                    .col(text(Product::Description))
                    .col(string(Product::Gemstone))
                    .col(double_null(Product::CaratWeight))
                    .col(string_null(Product::Origin))
                    .col(big_integer(Product::PriceCents))
                    .col(string_null(Product::ImageUrl))
                    .col(string(Product::Category))
                    .col(boolean(Product::Featured).default(false))
                    .col(boolean(Product::Active).default(true))
                    .col(integer(Product::Stock).default(0))
                    .col(integer(Product::SortOrder).default(0))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Slug,
    Name,
    Description,
    Gemstone,
    CaratWeight,
    Origin,
    PriceCents,
    ImageUrl,
    Category,
    Featured,
    Active,
    Stock,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
