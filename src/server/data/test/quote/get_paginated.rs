use super::*;

/// Tests the quote inbox listing.
///
/// Verifies newest-first ordering and the optional status filter.
///
/// Expected: Ok with filtered quotes in reverse chronological order
#[tokio::test]
async fn lists_newest_first_with_status_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quote).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::quote::QuoteFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::quote::QuoteFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    factory::quote::QuoteFactory::new(db)
        .status("closed")
        .build()
        .await?;

    let repo = QuoteRepository::new(db);
    let (new_quotes, new_total) = repo
        .get_paginated(Some(QuoteStatus::New), 0, 10)
        .await?;
    let (_, all_total) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(new_total, 2);
    assert_eq!(
        new_quotes.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(all_total, 3);
    assert_eq!(repo.count_by_status(QuoteStatus::Closed).await?, 1);

    Ok(())
}
