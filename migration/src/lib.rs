pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_product_table;
mod m20260301_000002_create_review_table;
mod m20260301_000003_create_faq_table;
mod m20260301_000004_create_quote_table;
mod m20260301_000005_create_stat_table;
mod m20260301_000006_create_site_content_table;
mod m20260301_000007_create_discount_code_table;
mod m20260301_000008_create_page_view_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_product_table::Migration),
            Box::new(m20260301_000002_create_review_table::Migration),
            Box::new(m20260301_000003_create_faq_table::Migration),
            Box::new(m20260301_000004_create_quote_table::Migration),
            Box::new(m20260301_000005_create_stat_table::Migration),
            Box::new(m20260301_000006_create_site_content_table::Migration),
            Box::new(m20260301_000007_create_discount_code_table::Migration),
            Box::new(m20260301_000008_create_page_view_table::Migration),
        ]
    }
}
