use super::*;

/// Tests that inactive products are hidden from the public catalog.
///
/// Expected: Ok with only active products
#[tokio::test]
async fn excludes_inactive_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visible = factory::product::create_product(db).await?;
    factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;

    let products = ProductRepository::new(db)
        .get_active(ProductFilter::default())
        .await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, visible.id);

    Ok(())
}

/// Tests category and featured filters.
///
/// Expected: Ok with only products matching both filters
#[tokio::test]
async fn filters_by_category_and_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let featured_ring = factory::product::ProductFactory::new(db)
        .category("rings")
        .featured(true)
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .category("rings")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .category("pendants")
        .featured(true)
        .build()
        .await?;

    let products = ProductRepository::new(db)
        .get_active(ProductFilter {
            category: Some("rings".to_string()),
            featured: Some(true),
        })
        .await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, featured_ring.id);

    Ok(())
}

/// Tests catalog ordering.
///
/// Verifies that products are ordered by sort_order ascending before recency.
///
/// Expected: Ok with lower sort_order first
#[tokio::test]
async fn orders_by_sort_order_then_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::product::ProductFactory::new(db)
        .sort_order(5)
        .build()
        .await?;
    let older = factory::product::ProductFactory::new(db)
        .sort_order(1)
        .build()
        .await?;
    let newer = factory::product::ProductFactory::new(db)
        .sort_order(1)
        .build()
        .await?;

    let ids: Vec<i32> = ProductRepository::new(db)
        .get_active(ProductFilter::default())
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id, last.id]);

    Ok(())
}
