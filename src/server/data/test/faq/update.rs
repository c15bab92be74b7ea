use super::*;

/// Tests replacing an FAQ entry.
///
/// Expected: Ok(Some) with new fields, Ok(None) for unknown IDs
#[tokio::test]
async fn updates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Faq).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let faq = factory::faq::create_faq(db).await?;
    let params = UpsertFaqParams {
        question: "Do you resize rings?".to_string(),
        answer: "Yes, free within 60 days.".to_string(),
        sort_order: 3,
        active: false,
    };

    let repo = FaqRepository::new(db);
    let updated = repo.update(faq.id, params.clone()).await?.unwrap();

    assert_eq!(updated.question, "Do you resize rings?");
    assert_eq!(updated.sort_order, 3);
    assert!(!updated.active);
    assert!(repo.update(faq.id + 100, params).await?.is_none());

    Ok(())
}
