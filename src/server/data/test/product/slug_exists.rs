use super::*;

/// Tests slug conflict detection.
///
/// Verifies that a product's own slug is not reported as a conflict when excluded.
///
/// Expected: Ok(true) for other products, Ok(false) when excluded or unused
#[tokio::test]
async fn detects_slug_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .slug("emerald-cut")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    assert!(repo.slug_exists("emerald-cut", None).await?);
    assert!(!repo.slug_exists("emerald-cut", Some(product.id)).await?);
    assert!(!repo.slug_exists("cushion-cut", None).await?);

    Ok(())
}
