//! Domain & parameter models for site content and SEO metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::content::{SeoMetadataDto, SiteContentDto},
    server::{
        error::AppError,
        util::validate::{is_valid_content_key, optional_length, require_length},
    },
};

/// Key prefix reserving site content rows for persisted SEO metadata.
pub const SEO_KEY_PREFIX: &str = "seo:";

const MAX_CONTENT_LENGTH: usize = 100_000;
const MAX_SEO_PATH_LENGTH: usize = 512;
const MAX_SEO_TITLE_LENGTH: usize = 200;
const MAX_SEO_DESCRIPTION_LENGTH: usize = 500;
const MAX_SEO_IMAGE_LENGTH: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl SiteContent {
    pub fn from_entity(entity: entity::site_content::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SiteContentDto {
        SiteContentDto {
            key: self.key,
            value: self.value,
        }
    }
}

/// Validated upsert of one editable content key.
#[derive(Debug, Clone)]
pub struct UpsertContentParams {
    pub key: String,
    pub value: String,
}

impl UpsertContentParams {
    pub fn new(key: String, value: String) -> Result<Self, AppError> {
        validate_content_key(&key)?;
        if value.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::BadRequest(format!(
                "value must be at most {} characters",
                MAX_CONTENT_LENGTH
            )));
        }

        Ok(Self { key, value })
    }
}

/// Editable keys are `[a-z0-9_.-]{1,100}`; the `seo:` namespace is never editable here.
pub fn validate_content_key(key: &str) -> Result<(), AppError> {
    if is_valid_content_key(key) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "key must be 1-100 characters of a-z, 0-9, '_', '.' or '-'".to_string(),
        ))
    }
}

/// Title, description and social image for one site path.
///
/// Serialized as the JSON value of the `seo:{path}` site content row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMetadata {
    pub path: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub og_image: Option<String>,
}

impl SeoMetadata {
    /// Site-wide metadata used for paths without an explicit entry.
    pub fn site_default(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: "Lumière Gems | Fine Gemstones & Custom Jewellery".to_string(),
            description: "Ethically sourced sapphires, emeralds, rubies and diamonds, \
                          hand-selected and set in custom jewellery."
                .to_string(),
            og_image: Some("/assets/og-default.jpg".to_string()),
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}{}", SEO_KEY_PREFIX, self.path)
    }

    pub fn from_dto(dto: SeoMetadataDto) -> Result<Self, AppError> {
        if !dto.path.starts_with('/') {
            return Err(AppError::BadRequest("path must start with '/'".to_string()));
        }
        require_length("path", &dto.path, MAX_SEO_PATH_LENGTH)?;
        require_length("title", &dto.title, MAX_SEO_TITLE_LENGTH)?;
        require_length("description", &dto.description, MAX_SEO_DESCRIPTION_LENGTH)?;
        let og_image = dto.og_image.filter(|i| !i.trim().is_empty());
        optional_length("og_image", og_image.as_deref(), MAX_SEO_IMAGE_LENGTH)?;

        Ok(Self {
            path: dto.path,
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            og_image,
        })
    }

    pub fn into_dto(self) -> SeoMetadataDto {
        SeoMetadataDto {
            path: self.path,
            title: self.title,
            description: self.description,
            og_image: self.og_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_seo_namespace_as_content_key() {
        assert!(UpsertContentParams::new("seo:/shop".to_string(), "x".to_string()).is_err());
        assert!(UpsertContentParams::new("home.hero".to_string(), "x".to_string()).is_ok());
    }

    #[test]
    fn seo_storage_key_is_prefixed() {
        let meta = SeoMetadata::site_default("/faq");
        assert_eq!(meta.storage_key(), "seo:/faq");
    }

    #[test]
    fn seo_path_must_be_rooted() {
        let dto = SeoMetadataDto {
            path: "shop".to_string(),
            title: "Shop".to_string(),
            description: "All stones".to_string(),
            og_image: None,
        };
        assert!(SeoMetadata::from_dto(dto).is_err());
    }
}
