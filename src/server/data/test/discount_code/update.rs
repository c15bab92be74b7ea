use super::*;

/// Tests deactivating a code and changing its limit.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_code_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(DiscountCode).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let code = factory::discount_code::create_discount_code(db).await?;

    let updated = DiscountCodeRepository::new(db)
        .update(
            code.id,
            UpdateDiscountCodeParams {
                active: false,
                expires_at: None,
                max_uses: Some(5),
            },
        )
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.max_uses, Some(5));
    assert_eq!(updated.code, code.code);

    Ok(())
}
