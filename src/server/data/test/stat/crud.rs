use super::*;

/// Tests stat ordering.
///
/// Expected: Ok with stats in sort_order
#[tokio::test]
async fn lists_in_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stat::create_stat_with(db, "Happy clients", "2,400+", 2).await?;
    factory::stat::create_stat_with(db, "Years in business", "18", 1).await?;

    let labels: Vec<String> = StatRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|s| s.label)
        .collect();

    assert_eq!(labels, vec!["Years in business", "Happy clients"]);

    Ok(())
}

/// Tests create, update and delete of a stat.
///
/// Expected: Ok for each step, with the row gone after delete
#[tokio::test]
async fn creates_updates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatRepository::new(db);
    let stat = repo
        .create(UpsertStatParams {
            label: "Stones sourced".to_string(),
            value: "900".to_string(),
            sort_order: 0,
        })
        .await?;

    let updated = repo
        .update(
            stat.id,
            UpsertStatParams {
                label: "Stones sourced".to_string(),
                value: "1,000+".to_string(),
                sort_order: 0,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.value, "1,000+");

    assert!(repo.delete(stat.id).await?);
    assert!(!repo.delete(stat.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
