use super::*;

/// Tests prefix lookups used to reload SEO metadata.
///
/// Expected: Ok with only keys under the prefix
#[tokio::test]
async fn returns_only_prefixed_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(SiteContent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site_content::create_site_content(db, "seo:/shop", "{}").await?;
    factory::site_content::create_site_content(db, "seo:/faq", "{}").await?;
    factory::site_content::create_site_content(db, "home.hero_title", "Hi").await?;

    let keys: Vec<String> = SiteContentRepository::new(db)
        .get_by_prefix("seo:")
        .await?
        .into_iter()
        .map(|row| row.key)
        .collect();

    assert_eq!(keys, vec!["seo:/faq", "seo:/shop"]);

    Ok(())
}
