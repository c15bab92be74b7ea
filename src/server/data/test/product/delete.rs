use super::*;

/// Tests deleting a product with reviews.
///
/// Verifies that the product's reviews are removed with it.
///
/// Expected: Ok(true) and no remaining rows
#[tokio::test]
async fn deletes_product_and_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _) = factory::helpers::create_product_with_reviews(db, 3).await?;

    let deleted = ProductRepository::new(db).delete(product.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ProductRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
