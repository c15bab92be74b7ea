use super::*;

/// Tests creating a product.
///
/// Verifies that the repository inserts the product with every provided field and
/// stamps creation and update times.
///
/// Expected: Ok with product created
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(params("padparadscha-oval", "Padparadscha Oval"))
        .await?;

    assert_eq!(product.slug, "padparadscha-oval");
    assert_eq!(product.price_cents, 240_000);
    assert_eq!(product.carat_weight, Some(1.8));
    assert_eq!(product.created_at, product.updated_at);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Expected: Err when a second product reuses a slug
#[tokio::test]
async fn fails_on_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    repo.create(params("twin", "Twin One")).await?;
    let result = repo.create(params("twin", "Twin Two")).await;

    assert!(result.is_err());

    Ok(())
}
