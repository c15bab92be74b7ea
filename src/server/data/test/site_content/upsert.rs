use super::*;

/// Tests inserting a new key.
///
/// Expected: Ok with the stored value
#[tokio::test]
async fn inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(SiteContent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = SiteContentRepository::new(db)
        .upsert("home.hero_title", "Stones with a story")
        .await?;

    assert_eq!(row.key, "home.hero_title");
    assert_eq!(row.value, "Stones with a story");

    Ok(())
}

/// Tests replacing an existing key.
///
/// Expected: Ok with the value replaced and a single row remaining
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(SiteContent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site_content::create_site_content(db, "home.hero_title", "Old").await?;

    let repo = SiteContentRepository::new(db);
    let row = repo.upsert("home.hero_title", "New").await?;

    assert_eq!(row.value, "New");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests deleting a key.
///
/// Expected: Ok(true) then Ok(false) once gone
#[tokio::test]
async fn deletes_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(SiteContent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site_content::create_site_content(db, "footer.note", "Hi").await?;

    let repo = SiteContentRepository::new(db);
    assert!(repo.delete("footer.note").await?);
    assert!(!repo.delete("footer.note").await?);
    assert!(repo.find_by_key("footer.note").await?.is_none());

    Ok(())
}
