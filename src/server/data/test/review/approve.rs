use super::*;

/// Tests approving a pending review.
///
/// Expected: Ok(Some) with approved flag set
#[tokio::test]
async fn approves_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let review = factory::review::create_review(db, product.id).await?;

    let approved = ReviewRepository::new(db).approve(review.id).await?;

    assert!(approved.is_some());
    assert!(approved.unwrap().approved);

    Ok(())
}

/// Tests approving an unknown review.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let approved = ReviewRepository::new(db).approve(7).await?;

    assert!(approved.is_none());

    Ok(())
}
