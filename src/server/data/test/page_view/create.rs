use super::*;

/// Tests logging a page view.
///
/// Expected: Ok with one row stored
#[tokio::test]
async fn stores_page_view() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PageView).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageViewRepository::new(db)
        .create(CreatePageViewParams {
            path: "/shop".to_string(),
            referrer: Some("https://search.example".to_string()),
        })
        .await?;

    let rows = PageView::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].path, "/shop");

    Ok(())
}
