use super::*;

/// Tests grouping views by path.
///
/// Expected: Ok with busiest paths first, ties ordered by path, old views ignored
#[tokio::test]
async fn groups_views_by_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::page_view::create_page_view_at(db, "/old", now - Duration::days(40)).await?;
    factory::page_view::create_page_view_at(db, "/old", now - Duration::days(40)).await?;
    factory::page_view::create_page_view_at(db, "/shop", now - Duration::days(1)).await?;
    factory::page_view::create_page_view_at(db, "/shop", now).await?;
    factory::page_view::create_page_view_at(db, "/faq", now).await?;
    factory::page_view::create_page_view_at(db, "/", now).await?;

    let counts = PageViewRepository::new(db)
        .count_by_path_since(now - Duration::days(30), 10)
        .await?;

    assert_eq!(
        counts,
        vec![
            ("/shop".to_string(), 2),
            ("/".to_string(), 1),
            ("/faq".to_string(), 1),
        ]
    );

    Ok(())
}

/// Tests the row limit on grouped paths.
///
/// Expected: Ok with at most `limit` paths
#[tokio::test]
async fn limits_grouped_paths() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        factory::page_view::create_page_view(db, &format!("/p/{}", i)).await?;
    }

    let counts = PageViewRepository::new(db)
        .count_by_path_since(Utc::now() - Duration::days(1), 3)
        .await?;

    assert_eq!(counts.len(), 3);

    Ok(())
}
