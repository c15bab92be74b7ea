use super::*;

/// Tests that submitted reviews await moderation.
///
/// Expected: Ok with an unapproved review
#[tokio::test]
async fn creates_unapproved_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let review = ReviewRepository::new(db)
        .create(CreateReviewParams {
            product_id: product.id,
            author_name: "Mei".to_string(),
            rating: 4,
            title: Some("Sparkles".to_string()),
            body: "Even better in daylight.".to_string(),
        })
        .await?;

    assert!(!review.approved);
    assert_eq!(review.product_id, product.id);
    assert_eq!(review.rating, 4);

    Ok(())
}
