use super::*;

/// Tests moving a quote through follow-up states.
///
/// Expected: Ok(Some) with the stored status changed
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quote).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quote = factory::quote::create_quote(db).await?;

    let repo = QuoteRepository::new(db);
    let updated = repo
        .update_status(quote.id, QuoteStatus::Contacted)
        .await?
        .unwrap();

    assert_eq!(updated.status, QuoteStatus::Contacted);
    assert!(repo
        .update_status(quote.id + 50, QuoteStatus::Closed)
        .await?
        .is_none());

    Ok(())
}
