use sea_orm::entity::prelude::*;

/// Custom quote request submitted from the storefront.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Product the customer asked about, if any. Not a foreign key so quotes survive product removal.
    pub product_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub budget_cents: Option<i64>,
    /// One of `new`, `contacted`, `closed`
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
