use super::*;

/// Tests admin pagination including inactive products.
///
/// Expected: Ok with page contents and total across all products
#[tokio::test]
async fn paginates_all_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::product::create_product(db).await?;
    }
    factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let (first_page, total) = repo.get_paginated(0, 3).await?;
    let (second_page, _) = repo.get_paginated(1, 3).await?;

    assert_eq!(total, 4);
    assert_eq!(first_page.len(), 3);
    assert_eq!(second_page.len(), 1);

    Ok(())
}
