//! Domain & parameter models for catalog products
//!
//! Defines the product domain model, the product filter and upsert parameters,
//! and the conversions from entity and into DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{ProductDto, UpsertProductDto},
    server::{
        error::AppError,
        util::{slug::slugify, validate::require_length},
    },
};

const MAX_NAME_LENGTH: usize = 200;
const MAX_SLUG_LENGTH: usize = 200;
/// Highest accepted unit price, CAD 10,000,000.00.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// A gemstone piece in the catalog. Prices are CAD cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub gemstone: String,
    pub carat_weight: Option<f64>,
    pub origin: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category: String,
    pub featured: bool,
    pub active: bool,
    pub stock: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            gemstone: entity.gemstone,
            carat_weight: entity.carat_weight,
            origin: entity.origin,
            price_cents: entity.price_cents,
            image_url: entity.image_url,
            category: entity.category,
            featured: entity.featured,
            active: entity.active,
            stock: entity.stock,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            gemstone: self.gemstone,
            carat_weight: self.carat_weight,
            origin: self.origin,
            price_cents: self.price_cents,
            image_url: self.image_url,
            category: self.category,
            featured: self.featured,
            active: self.active,
            stock: self.stock,
            sort_order: self.sort_order,
            created_at: self.created_at,
        }
    }
}

/// Optional filters for the public catalog listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Validated fields for creating or replacing a product.
#[derive(Debug, Clone)]
pub struct UpsertProductParams {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub gemstone: String,
    pub carat_weight: Option<f64>,
    pub origin: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category: String,
    pub featured: bool,
    pub active: bool,
    pub stock: i32,
    pub sort_order: i32,
}

impl UpsertProductParams {
    /// Validates an upsert payload and derives the slug from the name when omitted.
    ///
    /// # Returns
    /// - `Ok(UpsertProductParams)` - Trimmed, validated parameters
    /// - `Err(AppError::BadRequest)` - A field is out of range or the slug is empty
    pub fn from_dto(dto: UpsertProductDto) -> Result<Self, AppError> {
        require_length("name", &dto.name, MAX_NAME_LENGTH)?;
        require_length("gemstone", &dto.gemstone, MAX_NAME_LENGTH)?;
        require_length("category", &dto.category, MAX_NAME_LENGTH)?;

        if dto.price_cents < 0 {
            return Err(AppError::BadRequest(
                "price_cents must not be negative".to_string(),
            ));
        }
        if dto.price_cents > MAX_PRICE_CENTS {
            return Err(AppError::BadRequest(format!(
                "price_cents must not exceed {}",
                MAX_PRICE_CENTS
            )));
        }
        if dto.stock < 0 {
            return Err(AppError::BadRequest("stock must not be negative".to_string()));
        }
        if let Some(carat) = dto.carat_weight {
            if !(carat > 0.0) {
                return Err(AppError::BadRequest(
                    "carat_weight must be greater than zero".to_string(),
                ));
            }
        }

        let slug = slugify(dto.slug.as_deref().unwrap_or(&dto.name));
        if slug.is_empty() {
            return Err(AppError::BadRequest(
                "slug must contain at least one letter or digit".to_string(),
            ));
        }
        if slug.len() > MAX_SLUG_LENGTH {
            return Err(AppError::BadRequest(format!(
                "slug must be at most {} characters",
                MAX_SLUG_LENGTH
            )));
        }

        Ok(Self {
            slug,
            name: dto.name.trim().to_string(),
            description: dto.description,
            gemstone: dto.gemstone.trim().to_string(),
            carat_weight: dto.carat_weight,
            origin: dto.origin.filter(|o| !o.trim().is_empty()),
            price_cents: dto.price_cents,
            image_url: dto.image_url.filter(|u| !u.trim().is_empty()),
            category: dto.category.trim().to_lowercase(),
            featured: dto.featured,
            active: dto.active,
            stock: dto.stock,
            sort_order: dto.sort_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UpsertProductDto {
        UpsertProductDto {
            slug: None,
            name: "Ceylon Blue Sapphire".to_string(),
            description: String::new(),
            gemstone: "Sapphire".to_string(),
            carat_weight: Some(2.1),
            origin: Some("Sri Lanka".to_string()),
            price_cents: 450_000,
            image_url: None,
            category: "Loose".to_string(),
            featured: false,
            active: true,
            stock: 1,
            sort_order: 0,
        }
    }

    #[test]
    fn derives_slug_from_name() {
        let params = UpsertProductParams::from_dto(payload()).unwrap();
        assert_eq!(params.slug, "ceylon-blue-sapphire");
        assert_eq!(params.category, "loose");
    }

    #[test]
    fn normalizes_explicit_slug() {
        let mut dto = payload();
        dto.slug = Some("Blue Sapphire 2ct".to_string());
        let params = UpsertProductParams::from_dto(dto).unwrap();
        assert_eq!(params.slug, "blue-sapphire-2ct");
    }

    #[test]
    fn rejects_negative_price_and_stock() {
        let mut dto = payload();
        dto.price_cents = -1;
        assert!(matches!(
            UpsertProductParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));

        let mut dto = payload();
        dto.stock = -3;
        assert!(matches!(
            UpsertProductParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_price_above_cap() {
        let mut dto = payload();
        dto.price_cents = MAX_PRICE_CENTS;
        assert!(UpsertProductParams::from_dto(dto).is_ok());

        let mut dto = payload();
        dto.price_cents = i64::MAX / 2;
        assert!(matches!(
            UpsertProductParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_non_positive_carat() {
        let mut dto = payload();
        dto.carat_weight = Some(0.0);
        assert!(UpsertProductParams::from_dto(dto).is_err());
    }

    #[test]
    fn rejects_blank_or_long_name() {
        let mut dto = payload();
        dto.name = "  ".to_string();
        assert!(UpsertProductParams::from_dto(dto).is_err());

        let mut dto = payload();
        dto.name = "x".repeat(201);
        assert!(UpsertProductParams::from_dto(dto).is_err());
    }
}
