use super::*;

/// Tests that new quotes start in the `new` status.
///
/// Expected: Ok with status New
#[tokio::test]
async fn creates_quote_with_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quote).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quote = QuoteRepository::new(db)
        .create(CreateQuoteParams {
            name: "Olu".to_string(),
            email: "olu@example.com".to_string(),
            phone: None,
            product_id: None,
            message: "Engagement ring with a green tourmaline".to_string(),
            budget_cents: Some(250_000),
        })
        .await?;

    assert_eq!(quote.status, QuoteStatus::New);
    assert_eq!(quote.budget_cents, Some(250_000));

    Ok(())
}
