use super::*;

/// Tests the public review listing.
///
/// Verifies that only approved reviews for the requested product are returned, newest first.
///
/// Expected: Ok with approved reviews in reverse chronological order
#[tokio::test]
async fn returns_approved_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let other = factory::product::create_product(db).await?;
    let now = Utc::now();

    let older = factory::review::ReviewFactory::new(db, product.id)
        .approved(true)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::review::ReviewFactory::new(db, product.id)
        .approved(true)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::review::create_review(db, product.id).await?;
    factory::review::ReviewFactory::new(db, other.id)
        .approved(true)
        .build()
        .await?;

    let reviews = ReviewRepository::new(db)
        .get_approved_by_product(product.id)
        .await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
