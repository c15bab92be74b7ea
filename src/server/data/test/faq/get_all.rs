use super::*;

/// Tests the public FAQ listing.
///
/// Expected: Ok with only active entries in sort order
#[tokio::test]
async fn returns_active_entries_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Faq).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::faq::FaqFactory::new(db).sort_order(2).build().await?;
    let first = factory::faq::FaqFactory::new(db).sort_order(1).build().await?;
    factory::faq::FaqFactory::new(db)
        .sort_order(0)
        .active(false)
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let active: Vec<i32> = repo.get_all(true).await?.iter().map(|f| f.id).collect();
    let all = repo.get_all(false).await?;

    assert_eq!(active, vec![first.id, second.id]);
    assert_eq!(all.len(), 3);

    Ok(())
}
