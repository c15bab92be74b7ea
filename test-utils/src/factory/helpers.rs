//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used by factories to generate unique slugs, codes and names so tests never collide on
/// unique columns.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active product with the given number of approved reviews.
///
/// Reviews are created with ratings cycling through 5, 4, 3, 2, 1.
///
/// # Arguments
/// - `db` - Database connection
/// - `review_count` - Number of approved reviews to attach
///
/// # Returns
/// - `Ok((product, reviews))` - The product and its reviews in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_reviews(
    db: &DatabaseConnection,
    review_count: usize,
) -> Result<(entity::product::Model, Vec<entity::review::Model>), DbErr> {
    let product = crate::factory::product::create_product(db).await?;

    let mut reviews = Vec::with_capacity(review_count);
    for i in 0..review_count {
        let rating = 5 - (i % 5) as i16;
        let review = crate::factory::review::ReviewFactory::new(db, product.id)
            .rating(rating)
            .approved(true)
            .build()
            .await?;
        reviews.push(review);
    }

    Ok((product, reviews))
}
