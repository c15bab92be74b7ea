use super::*;

/// Tests decrementing stock.
///
/// Expected: Ok with remaining stock reduced by the quantity
#[tokio::test]
async fn decrements_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let remaining = ProductRepository::new(db)
        .decrement_stock(product.id, 2)
        .await?;

    assert_eq!(remaining, Some(3));

    Ok(())
}

/// Tests that stock never goes negative.
///
/// Expected: Ok with stock floored at zero
#[tokio::test]
async fn floors_stock_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(1)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    assert_eq!(repo.decrement_stock(product.id, 4).await?, Some(0));

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 0);

    Ok(())
}

/// Tests decrementing an unknown product.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remaining = ProductRepository::new(db).decrement_stock(999, 1).await?;

    assert_eq!(remaining, None);

    Ok(())
}

/// Tests that concurrent decrements on the same product all apply.
///
/// Expected: Ok with both decrements reflected in the stored stock
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn applies_concurrent_decrements() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let first = ProductRepository::new(db);
    let second = ProductRepository::new(db);
    let (a, b) = tokio::join!(
        first.decrement_stock(product.id, 2),
        second.decrement_stock(product.id, 2)
    );
    a?;
    b?;

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 1);

    Ok(())
}
