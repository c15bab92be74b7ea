use super::*;

/// Tests the analytics window total.
///
/// Expected: Ok with only views at or after the cutoff counted
#[tokio::test]
async fn counts_views_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::page_view::create_page_view_at(db, "/old", now - Duration::days(40)).await?;
    factory::page_view::create_page_view_at(db, "/faq", now - Duration::days(2)).await?;
    factory::page_view::create_page_view_at(db, "/shop", now - Duration::hours(1)).await?;

    let repo = PageViewRepository::new(db);
    let count = repo.count_since(now - Duration::days(30)).await?;

    assert_eq!(count, 2);

    Ok(())
}
