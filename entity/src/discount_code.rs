use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discount_code")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored upper-case
    #[sea_orm(unique)]
    pub code: String,
    pub percent_off: i16,
    pub active: bool,
    pub expires_at: Option<DateTimeUtc>,
    pub max_uses: Option<i32>,
    pub times_used: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
