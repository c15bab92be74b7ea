use super::*;

/// Tests moderation filters on the admin listing.
///
/// Expected: Ok with counts matching each status filter
#[tokio::test]
async fn filters_by_moderation_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _) = factory::helpers::create_product_with_reviews(db, 2).await?;
    factory::review::create_review(db, product.id).await?;

    let repo = ReviewRepository::new(db);
    let (pending, pending_total) = repo
        .get_paginated(ReviewStatusFilter::Pending, 0, 10)
        .await?;
    let (_, approved_total) = repo
        .get_paginated(ReviewStatusFilter::Approved, 0, 10)
        .await?;
    let (_, all_total) = repo.get_paginated(ReviewStatusFilter::All, 0, 10).await?;

    assert_eq!(pending_total, 1);
    assert!(!pending[0].approved);
    assert_eq!(approved_total, 2);
    assert_eq!(all_total, 3);
    assert_eq!(repo.count_pending().await?, 1);

    Ok(())
}
