use super::*;

/// Tests retention pruning.
///
/// Expected: Ok with only rows older than the cutoff removed
#[tokio::test]
async fn prunes_old_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::page_view::create_page_view_at(db, "/", now - Duration::days(400)).await?;
    factory::page_view::create_page_view_at(db, "/", now - Duration::days(366)).await?;
    factory::page_view::create_page_view(db, "/").await?;

    let removed = PageViewRepository::new(db)
        .delete_older_than(now - Duration::days(365))
        .await?;

    assert_eq!(removed, 2);
    assert_eq!(PageView::find().count(db).await?, 1);

    Ok(())
}
