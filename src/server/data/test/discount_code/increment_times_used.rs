use super::*;

/// Tests recording redemptions.
///
/// Expected: Ok(true) with counter incremented, Ok(false) for unknown codes
#[tokio::test]
async fn increments_usage_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(DiscountCode).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discount_code::DiscountCodeFactory::new(db)
        .code("GEMS20")
        .times_used(2)
        .build()
        .await?;

    let repo = DiscountCodeRepository::new(db);
    assert!(repo.increment_times_used("GEMS20").await?);
    assert!(!repo.increment_times_used("NOPE").await?);

    let stored = repo.find_by_code("GEMS20").await?.unwrap();
    assert_eq!(stored.times_used, 3);

    Ok(())
}

/// Tests that concurrent redemptions of one code are all counted.
///
/// Expected: Ok with the counter raised once per redemption
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn counts_concurrent_redemptions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(DiscountCode).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discount_code::DiscountCodeFactory::new(db)
        .code("SPARKLE")
        .build()
        .await?;

    let repo = DiscountCodeRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.increment_times_used("SPARKLE"),
        repo.increment_times_used("SPARKLE"),
        repo.increment_times_used("SPARKLE")
    );
    assert!(a? && b? && c?);

    let stored = repo.find_by_code("SPARKLE").await?.unwrap();
    assert_eq!(stored.times_used, 3);

    Ok(())
}
