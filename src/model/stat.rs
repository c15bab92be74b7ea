use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatDto {
    pub id: i32,
    pub label: String,
    pub value: String,
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertStatDto {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatePageViewDto {
    pub path: String,
    #[serde(default)]
    pub referrer: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PathViewsDto {
    pub path: String,
    pub views: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DailyViewsDto {
    pub date: NaiveDate,
    pub views: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AnalyticsDto {
    pub days: u32,
    pub total_views: u64,
    pub top_paths: Vec<PathViewsDto>,
    pub daily: Vec<DailyViewsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DashboardDto {
    pub active_products: u64,
    pub total_products: u64,
    pub pending_reviews: u64,
    pub new_quotes: u64,
    pub views_last_30_days: u64,
}
