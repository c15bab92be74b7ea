//! Domain & parameter models for public stats, page views, and analytics

use chrono::NaiveDate;

use crate::{
    model::stat::{
        AnalyticsDto, CreatePageViewDto, DailyViewsDto, DashboardDto, PathViewsDto, StatDto,
        UpsertStatDto,
    },
    server::{
        error::AppError,
        util::validate::{optional_length, require_length},
    },
};

const MAX_LABEL_LENGTH: usize = 100;
const MAX_VALUE_LENGTH: usize = 100;
const MAX_PATH_LENGTH: usize = 512;
const MAX_REFERRER_LENGTH: usize = 1024;

/// Default analytics window in days.
pub const DEFAULT_ANALYTICS_DAYS: u32 = 30;
/// Largest analytics window accepted.
pub const MAX_ANALYTICS_DAYS: u32 = 365;
/// Number of paths reported in the analytics top list.
pub const TOP_PATHS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub id: i32,
    pub label: String,
    pub value: String,
    pub sort_order: i32,
}

impl Stat {
    pub fn from_entity(entity: entity::stat::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            value: entity.value,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> StatDto {
        StatDto {
            id: self.id,
            label: self.label,
            value: self.value,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertStatParams {
    pub label: String,
    pub value: String,
    pub sort_order: i32,
}

impl UpsertStatParams {
    pub fn from_dto(dto: UpsertStatDto) -> Result<Self, AppError> {
        require_length("label", &dto.label, MAX_LABEL_LENGTH)?;
        require_length("value", &dto.value, MAX_VALUE_LENGTH)?;

        Ok(Self {
            label: dto.label.trim().to_string(),
            value: dto.value.trim().to_string(),
            sort_order: dto.sort_order,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreatePageViewParams {
    pub path: String,
    pub referrer: Option<String>,
}

impl CreatePageViewParams {
    pub fn from_dto(dto: CreatePageViewDto) -> Result<Self, AppError> {
        if !dto.path.starts_with('/') {
            return Err(AppError::BadRequest("path must start with '/'".to_string()));
        }
        if dto.path.chars().count() > MAX_PATH_LENGTH {
            return Err(AppError::BadRequest(format!(
                "path must be at most {} characters",
                MAX_PATH_LENGTH
            )));
        }
        let referrer = dto.referrer.filter(|r| !r.trim().is_empty());
        optional_length("referrer", referrer.as_deref(), MAX_REFERRER_LENGTH)?;

        Ok(Self {
            path: dto.path,
            referrer,
        })
    }
}

/// Validates the analytics window, defaulting to 30 days.
pub fn analytics_days(days: Option<u32>) -> Result<u32, AppError> {
    let days = days.unwrap_or(DEFAULT_ANALYTICS_DAYS);
    if !(1..=MAX_ANALYTICS_DAYS).contains(&days) {
        return Err(AppError::BadRequest(format!(
            "days must be between 1 and {}",
            MAX_ANALYTICS_DAYS
        )));
    }
    Ok(days)
}

/// Page view analytics over a trailing window.
#[derive(Debug, Clone)]
pub struct Analytics {
    pub days: u32,
    pub total_views: u64,
    pub top_paths: Vec<(String, u64)>,
    pub daily: Vec<(NaiveDate, u64)>,
}

impl Analytics {
    pub fn into_dto(self) -> AnalyticsDto {
        AnalyticsDto {
            days: self.days,
            total_views: self.total_views,
            top_paths: self
                .top_paths
                .into_iter()
                .map(|(path, views)| PathViewsDto { path, views })
                .collect(),
            daily: self
                .daily
                .into_iter()
                .map(|(date, views)| DailyViewsDto { date, views })
                .collect(),
        }
    }
}

/// Headline counters for the admin dashboard.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub active_products: u64,
    pub total_products: u64,
    pub pending_reviews: u64,
    pub new_quotes: u64,
    pub views_last_30_days: u64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            active_products: self.active_products,
            total_products: self.total_products,
            pending_reviews: self.pending_reviews,
            new_quotes: self.new_quotes,
            views_last_30_days: self.views_last_30_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_view_path_must_be_rooted() {
        let dto = CreatePageViewDto {
            path: "shop".to_string(),
            referrer: None,
        };
        assert!(CreatePageViewParams::from_dto(dto).is_err());
    }

    #[test]
    fn page_view_drops_blank_referrer() {
        let dto = CreatePageViewDto {
            path: "/shop".to_string(),
            referrer: Some("".to_string()),
        };
        let params = CreatePageViewParams::from_dto(dto).unwrap();
        assert_eq!(params.referrer, None);
    }

    #[test]
    fn page_view_rejects_long_path() {
        let dto = CreatePageViewDto {
            path: format!("/{}", "a".repeat(512)),
            referrer: None,
        };
        assert!(CreatePageViewParams::from_dto(dto).is_err());
    }

    #[test]
    fn analytics_window_bounds() {
        assert_eq!(analytics_days(None).unwrap(), 30);
        assert_eq!(analytics_days(Some(365)).unwrap(), 365);
        assert!(analytics_days(Some(0)).is_err());
        assert!(analytics_days(Some(366)).is_err());
    }
}
