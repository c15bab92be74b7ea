use super::*;

/// Tests creating a discount code.
///
/// Expected: Ok with an active, unused code that can be found by its text
#[tokio::test]
async fn creates_active_unused_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(DiscountCode).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscountCodeRepository::new(db);
    let code = repo.create("WELCOME15".to_string(), 15, None, Some(100)).await?;

    assert!(code.active);
    assert_eq!(code.times_used, 0);
    assert!(repo.code_exists("WELCOME15").await?);
    assert_eq!(
        repo.find_by_code("WELCOME15").await?.map(|c| c.id),
        Some(code.id)
    );

    Ok(())
}

/// Tests the unique code constraint.
///
/// Expected: Err on duplicate code text
#[tokio::test]
async fn fails_on_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(DiscountCode).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discount_code::DiscountCodeFactory::new(db)
        .code("DUP")
        .build()
        .await?;

    let result = DiscountCodeRepository::new(db)
        .create("DUP".to_string(), 10, None, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
