//! Domain & parameter models for product reviews

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ProductReviewsDto, ReviewDto},
    server::{
        error::AppError,
        util::validate::{optional_length, require_length},
    },
};

const MAX_AUTHOR_LENGTH: usize = 100;
const MAX_TITLE_LENGTH: usize = 200;
const MAX_BODY_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub author_name: String,
    pub rating: i16,
    pub title: Option<String>,
    pub body: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            author_name: entity.author_name,
            rating: entity.rating,
            title: entity.title,
            body: entity.body,
            approved: entity.approved,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            product_id: self.product_id,
            author_name: self.author_name,
            rating: self.rating,
            title: self.title,
            body: self.body,
            approved: self.approved,
            created_at: self.created_at,
        }
    }
}

/// Approved reviews for a product with their count and rounded average.
#[derive(Debug, Clone)]
pub struct ProductReviews {
    pub reviews: Vec<Review>,
    pub count: u64,
    pub average_rating: Option<f64>,
}

impl ProductReviews {
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let count = reviews.len() as u64;
        let average_rating = if reviews.is_empty() {
            None
        } else {
            let sum: i64 = reviews.iter().map(|r| r.rating as i64).sum();
            let mean = sum as f64 / count as f64;
            Some((mean * 10.0).round() / 10.0)
        };

        Self {
            reviews,
            count,
            average_rating,
        }
    }

    pub fn into_dto(self) -> ProductReviewsDto {
        ProductReviewsDto {
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            count: self.count,
            average_rating: self.average_rating,
        }
    }
}

/// Moderation filter for the admin review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStatusFilter {
    #[default]
    Pending,
    Approved,
    All,
}

impl ReviewStatusFilter {
    /// Parses the `status` query value; absent means pending.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None | Some("pending") => Ok(Self::Pending),
            Some("approved") => Ok(Self::Approved),
            Some("all") => Ok(Self::All),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unknown review status '{}', expected pending, approved or all",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub product_id: i32,
    pub author_name: String,
    pub rating: i16,
    pub title: Option<String>,
    pub body: String,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        require_length("author_name", &dto.author_name, MAX_AUTHOR_LENGTH)?;
        require_length("body", &dto.body, MAX_BODY_LENGTH)?;
        let title = dto
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        optional_length("title", title.as_deref(), MAX_TITLE_LENGTH)?;

        Ok(Self {
            product_id: dto.product_id,
            author_name: dto.author_name.trim().to_string(),
            rating: dto.rating,
            title,
            body: dto.body.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i16) -> Review {
        Review {
            id: 1,
            product_id: 1,
            author_name: "A".to_string(),
            rating,
            title: None,
            body: "Lovely".to_string(),
            approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn averages_to_one_decimal() {
        let summary = ProductReviews::from_reviews(vec![review(5), review(4), review(4)]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_rating, Some(4.3));
    }

    #[test]
    fn no_average_without_reviews() {
        let summary = ProductReviews::from_reviews(vec![]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let dto = CreateReviewDto {
            product_id: 1,
            author_name: "Sam".to_string(),
            rating: 6,
            title: None,
            body: "Great".to_string(),
        };
        assert!(matches!(
            CreateReviewParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_overlong_body() {
        let dto = CreateReviewDto {
            product_id: 1,
            author_name: "Sam".to_string(),
            rating: 4,
            title: Some("   ".to_string()),
            body: "x".repeat(2001),
        };
        assert!(CreateReviewParams::from_dto(dto).is_err());
    }

    #[test]
    fn parses_status_filter() {
        assert_eq!(ReviewStatusFilter::parse(None).unwrap(), ReviewStatusFilter::Pending);
        assert_eq!(
            ReviewStatusFilter::parse(Some("all")).unwrap(),
            ReviewStatusFilter::All
        );
        assert!(ReviewStatusFilter::parse(Some("spam")).is_err());
    }
}
