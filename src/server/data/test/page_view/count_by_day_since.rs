use super::*;

/// Tests grouping views by calendar day.
///
/// Expected: Ok with one `YYYY-MM-DD` bucket per day with traffic, oldest first
#[tokio::test]
async fn groups_views_by_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let yesterday = now - Duration::days(1);
    factory::page_view::create_page_view_at(db, "/old", now - Duration::days(40)).await?;
    factory::page_view::create_page_view_at(db, "/faq", yesterday).await?;
    factory::page_view::create_page_view_at(db, "/shop", now).await?;
    factory::page_view::create_page_view_at(db, "/", now).await?;

    let counts = PageViewRepository::new(db)
        .count_by_day_since(now - Duration::days(30))
        .await?;

    assert_eq!(
        counts,
        vec![
            (yesterday.date_naive().format("%Y-%m-%d").to_string(), 1),
            (now.date_naive().format("%Y-%m-%d").to_string(), 2),
        ]
    );

    Ok(())
}
